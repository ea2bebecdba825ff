//! Null matcher for modes without an implemented catalog lookup.

use super::{MatchOutcome, Matcher};
use crate::error::Result;
use crate::schema::{DebugInfo, InputSummary};

/// Always returns [`MatchOutcome::NoResult`].
///
/// Lets a mode handler exist before its catalog integration does, without
/// special-casing "unimplemented" anywhere in the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMatcher;

impl Matcher for NullMatcher {
    fn name(&self) -> &'static str {
        "null (not implemented)"
    }

    fn find(&self, _summary: &InputSummary, _debug: &mut DebugInfo) -> Result<MatchOutcome> {
        Ok(MatchOutcome::NoResult)
    }
}
