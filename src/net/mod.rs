//! Remote API contract consumed by the health-check, risk-score, and CSV
//! upload pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is an external collaborator. This module only fixes the
//! request/response shapes, the score banding shown next to a result, and
//! single-attempt HTTP calls whose failures become inline messages.

pub mod api;
