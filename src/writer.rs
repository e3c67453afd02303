use crate::contact::{Address, UserInfo};
use crate::error::Result;
use crate::frequency::NameCount;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Something that can be written out as one line of text.
///
/// `fields` returns the values in the order they appear on the line; every
/// implementation spells that order out by hand.
pub trait Record {
    fn fields(&self) -> Vec<String>;
}

impl Record for String {
    fn fields(&self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl Record for &str {
    fn fields(&self) -> Vec<String> {
        vec![(*self).to_owned()]
    }
}

impl Record for NameCount {
    fn fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.count.to_string()]
    }
}

impl Record for Address {
    fn fields(&self) -> Vec<String> {
        vec![self.number.to_string(), self.name.clone()]
    }
}

impl Record for UserInfo {
    fn fields(&self) -> Vec<String> {
        let mut fields = vec![self.first_name.clone(), self.last_name.clone()];
        fields.extend(self.address.fields());
        fields.push(self.phone_number.to_string());
        fields
    }
}

/// Writes one line per item, fields joined with `", "`. Replaces `path` if it
/// already exists.
pub fn write_records<T: Record>(path: &Path, items: &[T]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for item in items {
        writeln!(out, "{}", item.fields().join(", "))?;
    }
    out.flush()?;

    info!("wrote {} lines to {}", items.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| l.to_owned())
            .collect()
    }

    #[test]
    fn test_write_strings() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("NamesOrderedByFrequency.txt");

        write_records(&path, &["John", "Jane", "Adam, Jr", "Jane"]).unwrap();
        assert_eq!(read_lines(&path), vec!["John", "Jane", "Adam, Jr", "Jane"]);
    }

    #[test]
    fn test_write_addresses() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("AddressesSortedAlphabetically.txt");
        let addresses = vec![
            Address {
                number: 123,
                name: "Main St".to_owned(),
            },
            Address {
                number: 456,
                name: "Elm St".to_owned(),
            },
            Address {
                number: 789,
                name: "Oak Ave".to_owned(),
            },
        ];

        write_records(&path, &addresses).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "123, Main St\n456, Elm St\n789, Oak Ave\n"
        );
    }

    #[test]
    fn test_write_name_counts_and_users() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("out.txt");

        write_records(
            &path,
            &[NameCount {
                name: "Smith".to_owned(),
                count: 3,
            }],
        )
        .unwrap();
        assert_eq!(read_lines(&path), vec!["Smith, 3"]);

        write_records(
            &path,
            &[UserInfo {
                first_name: "John".to_owned(),
                last_name: "Doe".to_owned(),
                address: Address {
                    number: 1,
                    name: "Main St".to_owned(),
                },
                phone_number: 555,
            }],
        )
        .unwrap();
        assert_eq!(read_lines(&path), vec!["John, Doe, 1, Main St, 555"]);
    }

    #[test]
    fn test_write_empty() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("empty.txt");
        std::fs::write(&path, "stale\n").unwrap();

        write_records::<Address>(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_missing_directory() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("OutputFiles").join("out.txt");

        assert!(matches!(
            write_records(&path, &["John"]),
            Err(Error::Io(_))
        ));
    }
}
