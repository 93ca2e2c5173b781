use crate::lang::LineNumber;
use std::collections::BTreeMap;
use std::iter::FromIterator;
use std::sync::Arc;

/// A snapshot of the stored source, cheap to clone and safe to hand to the
/// terminal while the runtime keeps editing its own program.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<BTreeMap<LineNumber, String>>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn line(&self, num: usize) -> Option<&str> {
        if num > LineNumber::max_value() as usize {
            return None;
        }
        self.source.get(&(num as LineNumber)).map(|s| s.as_str())
    }

    /// Every stored line in ascending line-number order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.source.values().map(|s| s.as_str())
    }
}

impl FromIterator<(LineNumber, String)> for Listing {
    fn from_iter<I: IntoIterator<Item = (LineNumber, String)>>(iter: I) -> Listing {
        Listing {
            source: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
