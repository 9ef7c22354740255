pub type BlochResult<T> = Result<T, BlochError>;

#[derive(thiserror::Error, Debug)]
pub enum BlochError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("sampling error: {0}")]
    Sampling(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlochError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            BlochError::configuration("x")
                .to_string()
                .contains("configuration error:")
        );
        assert!(
            BlochError::sampling("x")
                .to_string()
                .contains("sampling error:")
        );
        assert!(
            BlochError::animation("x")
                .to_string()
                .contains("animation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = BlochError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
