use crate::index::CallArg;

/// Selects which argument texts of an assertion call describe the comparison.
///
/// Fixed per entry point: `assert(t, cmp::equal(a, b))` reports the arguments
/// of the comparison call, `equal(t, a, b)` reports everything after `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsFilter {
    /// The arguments of argument 1, when argument 1 is a call expression.
    FromComparison,
    /// Every argument after the first.
    ExcludeFirst,
}

impl ArgsFilter {
    #[must_use]
    pub fn apply(self, args: &[CallArg]) -> Vec<String> {
        match self {
            Self::FromComparison => args
                .get(1)
                .and_then(CallArg::nested_args)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            Self::ExcludeFirst => args
                .iter()
                .skip(1)
                .map(|arg| arg.text().to_owned())
                .collect(),
        }
    }
}
