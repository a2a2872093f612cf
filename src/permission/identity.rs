use std::fmt;

/// Name of the runtime permission a view-model manages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permission(String);

impl Permission {
    pub const CAMERA: &str = "camera";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn camera() -> Self {
        Self::new(Self::CAMERA)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Permission {
    fn default() -> Self {
        Self::camera()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
