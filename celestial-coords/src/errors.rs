use crate::Frame;
use celestial_core::AstroError;
use celestial_time::TimeError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordError {
    /// Separation or comparison between coordinates in different frames.
    #[error("Frame mismatch: cannot compare {left} with {right} coordinates; convert one first")]
    FrameMismatch { left: Frame, right: Frame },

    #[error("Observer required for {from} -> {to} conversion")]
    MissingObserver { from: Frame, to: Frame },

    /// Only raised when strict epoch checking is enabled.
    #[error("Dubious epoch MJD {mjd} for {from} -> {to} conversion")]
    DubiousEpoch { from: Frame, to: Frame, mjd: f64 },

    #[error(transparent)]
    Core(#[from] AstroError),

    #[error("Epoch conversion failed: {source}")]
    Epoch {
        #[from]
        source: TimeError,
    },
}

impl CoordError {
    pub fn frame_mismatch(left: Frame, right: Frame) -> Self {
        Self::FrameMismatch { left, right }
    }

    pub fn missing_observer(from: Frame, to: Frame) -> Self {
        Self::MissingObserver { from, to }
    }

    /// The underlying [`AstroError`], whether it surfaced directly or through
    /// the time layer.
    pub fn as_astro(&self) -> Option<&AstroError> {
        match self {
            Self::Core(e) => Some(e),
            Self::Epoch {
                source: TimeError::Core(e),
            } => Some(e),
            _ => None,
        }
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self.as_astro(), Some(AstroError::InvalidValue { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_mismatch_names_frames() {
        let err = CoordError::frame_mismatch(Frame::Icrs, Frame::Galactic);
        let msg = err.to_string();
        assert!(msg.contains("ICRS"));
        assert!(msg.contains("GALACTIC"));
    }

    #[test]
    fn test_as_astro_through_time_layer() {
        let core = AstroError::primitive("eraUtctai", -1, "unacceptable date");
        let err: CoordError = TimeError::from(core.clone()).into();
        assert_eq!(err.as_astro(), Some(&core));

        let direct: CoordError = AstroError::invalid_value("Observer", "bad").into();
        assert!(direct.is_invalid_value());
        assert!(CoordError::missing_observer(Frame::Icrs, Frame::Observed)
            .as_astro()
            .is_none());
    }
}
