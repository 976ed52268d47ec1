use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Key of one parameter: the namespace of the builder that owns it plus the
/// parameter name inside that namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamKey {
    pub scope: &'static str,
    pub name: &'static str,
}

/// Mutable options bag handed to a file-system provider.
///
/// The bag knows nothing about the values it stores; each config builder
/// defines its own slots and reads them back by concrete type. Writing a
/// slot twice keeps the last value. The bag does no locking of its own.
#[derive(Clone, Default)]
pub struct FileSystemOptions {
    params: HashMap<ParamKey, Arc<dyn Any + Send + Sync>>,
}

impl FileSystemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_param<T>(&mut self, scope: &'static str, name: &'static str, value: T)
    where
        T: Any + Send + Sync,
    {
        self.params.insert(ParamKey { scope, name }, Arc::new(value));
    }

    /// Read a parameter back. Returns `None` when the slot is unset or holds
    /// a value of another type.
    pub fn get_param<T>(&self, scope: &'static str, name: &'static str) -> Option<&T>
    where
        T: Any + Send + Sync,
    {
        self.params.get(&ParamKey { scope, name }).and_then(|v| v.downcast_ref::<T>())
    }

    pub fn has_param(&self, scope: &'static str, name: &'static str) -> bool {
        self.params.contains_key(&ParamKey { scope, name })
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Debug for FileSystemOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.params.keys().collect();
        keys.sort();
        f.debug_struct("FileSystemOptions").field("params", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let opts = FileSystemOptions::new();
        assert!(opts.is_empty());
        assert!(!opts.has_param("zip", "charset"));
        assert!(opts.get_param::<String>("zip", "charset").is_none());
    }

    #[test]
    fn test_set_and_get() {
        let mut opts = FileSystemOptions::new();
        opts.set_param("sftp", "timeout", 30u32);
        assert!(opts.has_param("sftp", "timeout"));
        assert_eq!(opts.get_param::<u32>("sftp", "timeout"), Some(&30));
        // same slot, wrong type
        assert!(opts.get_param::<u64>("sftp", "timeout").is_none());
        // same name, other scope
        assert!(!opts.has_param("ftp", "timeout"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut opts = FileSystemOptions::new();
        opts.set_param("zip", "comment", "first".to_string());
        opts.set_param("zip", "comment", "second".to_string());
        assert_eq!(opts.len(), 1);
        assert_eq!(opts.get_param::<String>("zip", "comment").map(String::as_str), Some("second"));
    }
}
