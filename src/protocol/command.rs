/// A named command together with its parameter list, ready to be written
/// to the control connection by a [`Query`](crate::Query) implementation.
///
/// Parameters keep their insertion order. Setting a key that is already
/// present replaces its value in place, so caller-supplied options win
/// over the defaults a session fills in first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    params: Vec<(String, String)>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a parameter, replacing an earlier value under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();

        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.params.push((key, value)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut command = Command::new("ftinitupload")
            .arg("clientftfid", 17)
            .arg("cpw", "")
            .arg("overwrite", 0);

        command.set("cpw", "secret");

        assert_eq!(command.get("cpw"), Some("secret"));
        assert_eq!(
            command
                .params()
                .iter()
                .map(|(k, _)| k.as_str())
                .collect::<Vec<_>>(),
            ["clientftfid", "cpw", "overwrite"]
        );
    }

    #[test]
    fn get_absent_key() {
        let command = Command::new("ftlist");
        assert_eq!(command.get("cid"), None);
        assert!(command.params().is_empty());
    }
}
