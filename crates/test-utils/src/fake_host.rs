use pkgstep::host::HostIdentity;

/// A host identity with fixed id/version strings, for tests that must not
/// depend on the machine they run on.
#[derive(Debug, Clone)]
pub struct FakeHost {
    id: String,
    version: String,
}

impl FakeHost {
    pub fn new(id: &str, version: &str) -> Self {
        Self {
            id: id.to_string(),
            version: version.to_string(),
        }
    }
}

impl HostIdentity for FakeHost {
    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> &str {
        &self.version
    }
}
