//! Cookie line: `Cookie: n1=v1; n2=v2`, only when cookies are given.

use super::EOL;
use crate::descriptor::CookiePair;
use crate::error::{InvalidRequest, Result};

pub(crate) fn build_cookie_line(cookie: Option<&[CookiePair]>) -> Result<String> {
    let Some(pairs) = cookie else {
        return Ok(String::new());
    };
    if pairs.is_empty() {
        return Err(InvalidRequest::empty_collection(
            "Cookie name-value pairs list must be not empty",
        ));
    }

    let pairs = pairs
        .iter()
        .map(|pair| {
            if pair.name.is_empty() || pair.value.is_empty() {
                Err(InvalidRequest::missing_field("Cookie name or value must be not empty")
                    .with_data(pair))
            } else {
                Ok(format!("{}={}", pair.name, pair.value))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("Cookie: {}{EOL}", pairs.join("; ")))
}
