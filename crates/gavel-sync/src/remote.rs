//! Remote collaborator contracts.
//!
//! The core never talks to a backend itself; the host app implements
//! these traits over whatever transport it has. Saving locally and
//! uploading are independent: a failed upload must never roll back or
//! block the local save.

use gavel_trial::types::Trial;
use thiserror::Error;

/// Upload failures, reported to the caller rather than panicking.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The device is offline or the backend is unreachable.
    #[error("remote unreachable: {0}")]
    Unreachable(String),

    /// The backend rejected the upload.
    #[error("upload rejected: {0}")]
    Rejected(String),
}

/// Uploads a trial to the connected school account.
///
/// Callers are expected to run
/// [`validate_trial_details`](gavel_trial::validate::validate_trial_details)
/// first; an implementation may still reject an incomplete trial.
pub trait TrialRemote {
    /// Upload one trial. The local copy is already saved by the time
    /// this is called.
    fn upload_trial(&self, trial: &Trial) -> Result<(), RemoteError>;
}

/// Network reachability, consulted before starting a timed stage so the
/// user learns about connectivity problems before the round, not after.
pub trait Connectivity {
    /// Whether the device currently has a usable connection.
    fn is_connected(&self) -> bool;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_core::ids::TrialId;
    use gavel_trial::stage::Stage;
    use gavel_trial::types::{League, TrialSetup, TrialTimes, WitnessSlots};

    struct RecordingRemote {
        fail: bool,
        uploaded: std::cell::RefCell<Vec<TrialId>>,
    }

    impl TrialRemote for RecordingRemote {
        fn upload_trial(&self, trial: &Trial) -> Result<(), RemoteError> {
            if self.fail {
                return Err(RemoteError::Unreachable("no route".to_string()));
            }
            self.uploaded.borrow_mut().push(trial.id.clone());
            Ok(())
        }
    }

    fn sample_trial() -> Trial {
        Trial {
            id: TrialId::from("t"),
            league: League::California,
            name: "Upload me".to_string(),
            date: 0,
            setup: TrialSetup::default(),
            stage: Stage::OpenPros,
            times: TrialTimes::default(),
            witnesses: WitnessSlots::default(),
            loss: 0,
            details: None,
        }
    }

    #[test]
    fn upload_reports_failure_as_a_value() {
        let remote = RecordingRemote { fail: true, uploaded: std::cell::RefCell::new(vec![]) };
        let err = remote.upload_trial(&sample_trial()).unwrap_err();
        assert!(matches!(err, RemoteError::Unreachable(_)));
        assert!(remote.uploaded.borrow().is_empty());
    }

    #[test]
    fn upload_succeeds_through_the_trait_object() {
        let remote = RecordingRemote { fail: false, uploaded: std::cell::RefCell::new(vec![]) };
        let dyn_remote: &dyn TrialRemote = &remote;
        dyn_remote.upload_trial(&sample_trial()).unwrap();
        assert_eq!(remote.uploaded.borrow().len(), 1);
    }
}
