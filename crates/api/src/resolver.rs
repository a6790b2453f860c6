/// Answers whether a fully-qualified class name refers to a loadable class.
///
/// There is no runtime class loading to ask, so implementations consult
/// whatever was registered up front (a known-class table, a classmap, the
/// PSR-4 layout on disk).
pub trait ClassResolver: Send + Sync {
    fn class_exists(&self, fqcn: &str) -> bool;
}

impl<F> ClassResolver for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn class_exists(&self, fqcn: &str) -> bool {
        self(fqcn)
    }
}
