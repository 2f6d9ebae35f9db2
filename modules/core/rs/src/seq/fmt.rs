use std::fmt::{self, Display, Formatter};

use derive_more::Constructor;

use super::ops::SeqOp;

/// Formats any [`SeqOp`] element by element, with no separators or framing.
///
/// Owning containers and borrowed ranges share this single serialization
/// path, so a range view prints exactly like the sub-sequence it references.
#[derive(Constructor)]
pub struct SeqDisplay<'a, S: ?Sized> {
    seq: &'a S,
}

impl<S> Display for SeqDisplay<'_, S>
where
    S: SeqOp + ?Sized,
    S::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for item in self.seq.iter() {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
