/// Knobs for a single extraction call.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractOptions {
    pub strip_components: usize,
    pub link_policy: LinkPolicy,
}

impl ExtractOptions {
    pub fn strip_components(mut self, n: usize) -> Self {
        self.strip_components = n;
        self
    }

    pub fn link_policy(mut self, policy: LinkPolicy) -> Self {
        self.link_policy = policy;
        self
    }
}

/// How symlink entries' recorded targets are treated.
///
/// The target text is written verbatim either way; `Contain` additionally
/// rejects targets that are absolute or resolve outside the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    #[default]
    Preserve,
    Contain,
}
