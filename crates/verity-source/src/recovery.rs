use tracing::debug;

use crate::cache;
use crate::call_site::CallSite;
use crate::config::{RecoveryConfig, RecoveryMode};
use crate::error::SourceError;
use crate::index::{CallArg, CallExpr};

/// Source recovery bound to one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovery {
    config: RecoveryConfig,
}

impl Recovery {
    #[must_use]
    pub const fn new(config: RecoveryConfig) -> Self {
        Self { config }
    }

    /// Recovery using [`RecoveryConfig::global`].
    #[must_use]
    pub fn global() -> Self {
        Self::new(*RecoveryConfig::global())
    }

    /// Text of argument `position` (0-based) of the call at `site`.
    pub fn formatted_call_expr_arg(
        &self,
        site: &CallSite,
        position: usize,
    ) -> Result<String, SourceError> {
        self.with_call(site, |call| {
            call.args()
                .get(position)
                .map(|arg| arg.text().to_owned())
                .ok_or_else(|| SourceError::ArgumentOutOfRange {
                    file: site.file().into(),
                    line: site.line(),
                    position,
                    len: call.args().len(),
                })
        })
    }

    pub fn call_expr_args(&self, site: &CallSite) -> Result<Vec<CallArg>, SourceError> {
        self.with_call(site, |call| Ok(call.args().to_vec()))
    }

    fn with_call<R>(
        &self,
        site: &CallSite,
        f: impl FnOnce(&CallExpr) -> Result<R, SourceError>,
    ) -> Result<R, SourceError> {
        if self.config.mode == RecoveryMode::Disabled {
            return Err(SourceError::Disabled);
        }
        let index = cache::load_index(site.file(), self.config.cache)?;
        let call = index
            .call_at(site.line(), site.column())
            .ok_or_else(|| SourceError::CallNotFound {
                file: site.file().into(),
                line: site.line(),
            })?;
        debug!("source call located site={site} args={}", call.args().len());
        f(call)
    }
}
