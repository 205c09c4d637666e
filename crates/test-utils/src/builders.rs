#![allow(dead_code)]

use pkgstep::pkgs::PackageSpec;
use pkgstep::provider::Provider;
use pkgstep::step::StepRequest;

/// Builder for `StepRequest` to simplify test setup.
pub struct StepRequestBuilder {
    step: StepRequest,
}

impl StepRequestBuilder {
    pub fn new(pkgs: impl Into<PackageSpec>) -> Self {
        Self {
            step: StepRequest::new(pkgs),
        }
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.step.provider = Some(provider);
        self
    }

    pub fn timeout(mut self, secs: u64) -> Self {
        self.step.timeout = secs;
        self
    }

    pub fn build(self) -> StepRequest {
        self.step
    }
}
