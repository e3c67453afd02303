use crate::error::{Error, Result};
use crate::table::Table;
use nom::bytes::complete::{take_till1, take_while1};
use nom::combinator::rest;
use nom::sequence::separated_pair;
use tracing::debug;

pub const FIRST_NAME: &str = "FirstName";
pub const LAST_NAME: &str = "LastName";
pub const ADDRESS: &str = "Address";
pub const PHONE_NUMBER: &str = "PhoneNumber";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub number: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
    pub phone_number: i64,
}

/// `"<token><whitespace><rest>"`, split at the first whitespace run.
fn street(s: &str) -> nom::IResult<&str, (&str, &str)> {
    separated_pair(
        take_till1(char::is_whitespace),
        take_while1(char::is_whitespace),
        rest,
    )(s)
}

impl Address {
    /// A leading token that is not a number becomes 0 and the remainder is
    /// still kept as the street name. Anything that does not split in two is
    /// the default address.
    pub fn parse(s: &str) -> Address {
        match street(s) {
            Ok((_, (number, name))) => Address {
                number: number.parse().unwrap_or(0),
                name: name.to_owned(),
            },
            Err(_) => Address::default(),
        }
    }
}

fn parse_phone_number(value: Option<&str>, row: usize) -> Result<i64> {
    match value {
        None => Ok(0),
        Some(v) => v.parse().map_err(|_| {
            Error::Format(format!("Invalid phone number in row {}: {:?}", row + 1, v))
        }),
    }
}

/// One `UserInfo` per row that has both a first and a last name, in row order.
pub fn extract(table: &Table) -> Result<Vec<UserInfo>> {
    let first = table.column_index(FIRST_NAME)?;
    let last = table.column_index(LAST_NAME)?;
    let address = table.column_index(ADDRESS)?;
    let phone = table.column_index(PHONE_NUMBER)?;

    let mut users = vec![];
    for (i, row) in table.rows().enumerate() {
        let (first_name, last_name) = match (row.at(first), row.at(last)) {
            (Some(f), Some(l)) if !f.is_empty() && !l.is_empty() => (f, l),
            _ => {
                debug!("row {}: no first or last name, skipping", i + 1);
                continue;
            }
        };

        users.push(UserInfo {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            address: row.at(address).map(Address::parse).unwrap_or_default(),
            phone_number: parse_phone_number(row.at(phone), i)?,
        });
    }

    debug!("extracted {} of {} rows", users.len(), table.rows.len());
    Ok(users)
}
