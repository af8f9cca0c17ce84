//! Session MCP Tools
//!
//! Selection-driven conversion, mirroring the category and unit pickers and
//! the Shrek mode toggle.

use serde::Serialize;

use crate::conversion::Direction;
use crate::session::{Session, SessionSnapshot};

/// Response for session_convert
#[derive(Debug, Serialize)]
pub struct SessionConvertResponse {
    pub amount: f64,
    pub direction: Direction,
    pub value: f64,
    pub formatted: String,
}

pub fn get_session(session: &Session) -> SessionSnapshot {
    session.snapshot()
}

pub fn select_category(session: &mut Session, name: &str) -> Result<SessionSnapshot, String> {
    session.select_category(name).map_err(|e| e.to_string())?;
    Ok(session.snapshot())
}

pub fn select_unit(session: &mut Session, name: &str) -> Result<SessionSnapshot, String> {
    session.select_unit(name).map_err(|e| e.to_string())?;
    Ok(session.snapshot())
}

pub fn toggle_shrek_mode(session: &mut Session) -> SessionSnapshot {
    let enabled = session.toggle_shrek_mode();
    tracing::info!(shrek_mode = enabled, "Shrek mode toggled");
    session.snapshot()
}

pub fn session_convert(session: &Session, amount: &str) -> Result<SessionConvertResponse, String> {
    let result = session.conversion(amount).map_err(|e| e.to_string())?;
    Ok(SessionConvertResponse {
        amount: result.amount,
        direction: result.direction,
        value: result.value,
        formatted: result.format(session.precision()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    fn session() -> Session {
        Session::new(Arc::new(Catalog::seeded().unwrap()), 6)
    }

    #[test]
    fn test_selection_flow() {
        let mut session = session();
        let snapshot = select_category(&mut session, "Distance").unwrap();
        assert_eq!(snapshot.unit.as_deref(), Some("Inches"));

        let snapshot = select_unit(&mut session, "Feet").unwrap();
        assert_eq!(snapshot.hint, "# Feet");

        let snapshot = toggle_shrek_mode(&mut session);
        assert!(snapshot.shrek_mode);
        assert_eq!(snapshot.hint, "# Shreks");

        let response = session_convert(&session, "2").unwrap();
        assert_eq!(response.value, 16.0);
        assert_eq!(response.formatted, "16.000000 \"");
    }

    #[test]
    fn test_session_convert_errors() {
        let session = session();
        assert_eq!(
            session_convert(&session, "abc").unwrap_err(),
            "'abc' is not a number"
        );

        let empty = Session::new(Arc::new(Catalog::new()), 6);
        assert_eq!(session_convert(&empty, "1").unwrap_err(), "No unit selected");
    }

    #[test]
    fn test_failed_selection_keeps_state() {
        let mut session = session();
        assert!(select_unit(&mut session, "Parsecs").is_err());
        assert_eq!(get_session(&session).unit.as_deref(), Some("Milliseconds"));
    }
}
