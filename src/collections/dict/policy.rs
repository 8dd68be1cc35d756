/// What [`Dict::set`](super::Dict::set) does with a delimited path whose parent segment doesn't
/// resolve to a dict.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathPolicy {
    /// Discard the write and return successfully.
    #[default]
    Drop,
    /// Insert an empty child dict for an absent parent and continue. A parent that exists but
    /// holds something other than a mapping is still dropped.
    Create,
    /// Fail with [`MissingPath`](super::MissingPath).
    Error,
}
