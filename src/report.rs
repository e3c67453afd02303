use crate::contact::{Address, UserInfo, FIRST_NAME, LAST_NAME};
use crate::error::Result;
use crate::frequency::{frequency, NameCount};
use crate::table::Table;

/// First and last name counts in one list, most frequent first, ties broken by
/// name. A name used both as a first and a last name shows up twice.
pub fn names_by_frequency(table: &Table) -> Result<Vec<NameCount>> {
    let mut names = frequency(table, FIRST_NAME)?;
    names.extend(frequency(table, LAST_NAME)?);
    names.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    Ok(names)
}

/// Addresses ordered by street name. Equal street names keep the order of the
/// users they came from.
pub fn addresses_by_street(users: &[UserInfo]) -> Vec<Address> {
    let mut addresses = users
        .iter()
        .map(|u| u.address.clone())
        .collect::<Vec<_>>();
    addresses.sort_by(|a, b| a.name.cmp(&b.name));
    addresses
}
