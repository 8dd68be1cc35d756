use std::fmt::{self, Debug, Display, Formatter};

/// Prints the contained string as is, for use in the entries of derived-looking debug output.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Displays every item of `items`, with `separator` between each pair.
pub struct Joined<'s, I> {
    pub items: I,
    pub separator: &'s str,
}

impl<I> Display for Joined<'_, I>
where
    I: Iterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.clone().enumerate() {
            if i > 0 {
                f.write_str(self.separator)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
