use std::sync::{Arc, Mutex};

use crate::error::{Result, SessionError};

use super::CurveSession;

/// Cloneable handle to a [`CurveSession`] behind a single lock.
///
/// Every access goes through [`with`](Self::with), so a closure that pushes
/// points and then samples the curve sees one consistent point list.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<CurveSession>>,
}

impl SharedSession {
    #[must_use]
    pub fn new(session: CurveSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Runs `f` with exclusive access to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if another holder panicked while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut CurveSession) -> R) -> Result<R> {
        let mut guard = self.inner.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(f(&mut guard))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BezelError;
    use crate::math::Point3;
    use crate::session::SessionConfig;
    use std::thread;

    fn shared() -> SharedSession {
        SharedSession::new(CurveSession::new(SessionConfig::default()).unwrap())
    }

    #[test]
    fn concurrent_pushes_are_all_applied() {
        let session = shared();
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let session = session.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let p = Point3::new(f64::from(worker), f64::from(i), 0.0);
                        session.with(|s| s.push(p)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        // Distinct coordinates per push, so nothing is rejected.
        assert_eq!(session.with(|s| s.points().len()).unwrap(), 100);
    }

    #[test]
    fn snapshot_inside_one_lock() {
        let session = shared();
        let (vertices, samples) = session
            .with(|s| {
                s.push(Point3::new(0.0, 0.0, 0.0));
                s.push(Point3::new(1.0, 2.0, 0.0));
                s.push(Point3::new(2.0, 0.0, 0.0));
                (s.vertices(), s.curve())
            })
            .unwrap();
        let samples = samples.unwrap();
        assert_eq!(samples.first(), vertices.first());
        assert!((samples[samples.len() - 1] - vertices[2]).norm() < 1e-12);
    }

    #[test]
    fn poisoned_lock_is_an_error() {
        let session = shared();
        let clone = session.clone();
        let _ = thread::spawn(move || {
            clone
                .with(|s| {
                    if s.points().is_empty() {
                        panic!("render thread died");
                    }
                })
                .unwrap();
        })
        .join();
        let err = session.with(|s| s.points().len()).unwrap_err();
        assert!(matches!(err, BezelError::Session(SessionError::Poisoned)));
    }
}
