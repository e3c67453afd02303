use crate::error::Result;
use crate::table::Table;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// Counts the distinct non-empty values of `column`. Groups come out in the
/// order their value was first seen.
pub fn frequency(table: &Table, column: &str) -> Result<Vec<NameCount>> {
    let index = table.column_index(column)?;

    let mut groups: Vec<NameCount> = vec![];
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for row in table.rows() {
        let value = match row.at(index) {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };
        match seen.get(value) {
            Some(&i) => groups[i].count += 1,
            None => {
                seen.insert(value, groups.len());
                groups.push(NameCount {
                    name: value.to_owned(),
                    count: 1,
                });
            }
        }
    }

    debug!("{}: {} distinct values", column, groups.len());
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_csv;
    use crate::error::Error;

    fn count(name: &str, count: usize) -> NameCount {
        NameCount {
            name: name.to_owned(),
            count,
        }
    }

    #[test]
    fn test_frequency_first_seen_order() {
        let table = parse_csv("FirstName,LastName\nJohn,Doe\nJohn,Smith\nJane,Doe").unwrap();
        assert_eq!(
            frequency(&table, "FirstName").unwrap(),
            vec![count("John", 2), count("Jane", 1)]
        );
        assert_eq!(
            frequency(&table, "LastName").unwrap(),
            vec![count("Doe", 2), count("Smith", 1)]
        );
    }

    #[test]
    fn test_frequency_skips_blank_and_missing() {
        let table = parse_csv("FirstName,LastName\n,Doe\nJane\nJane,").unwrap();
        assert_eq!(frequency(&table, "FirstName").unwrap(), vec![count("Jane", 2)]);
        assert_eq!(frequency(&table, "LastName").unwrap(), vec![count("Doe", 1)]);
    }

    #[test]
    fn test_frequency_is_case_sensitive() {
        let table = parse_csv("FirstName\njohn\nJohn").unwrap();
        assert_eq!(
            frequency(&table, "FirstName").unwrap(),
            vec![count("john", 1), count("John", 1)]
        );
    }

    #[test]
    fn test_frequency_unknown_column() {
        let table = parse_csv("FirstName\nJohn").unwrap();
        assert!(matches!(
            frequency(&table, "Nickname"),
            Err(Error::MissingColumn(_))
        ));
    }
}
