//! Per-user secret bundle stored (encrypted) by the credential store.
//!
//! The bundle is a flat string map. Most keys are HoYoLAB cookie entries copied from
//! the user's browser; a handful of reserved keys hold bot bookkeeping (the selected
//! game account and the wish history authkey) and are never sent as cookies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::account::GameAccount};

/// Cookie keys that must be present for the account API to accept a request.
pub const REQUIRED_COOKIE_KEYS: [&str; 2] = ["ltuid_v2", "ltoken_v2"];

const GAME_UID_KEY: &str = "game_uid";
const GAME_REGION_KEY: &str = "game_region";
const AUTHKEY_KEY: &str = "authkey";
const AUTHKEY_UID_KEY: &str = "authkey_uid";

/// Bookkeeping keys excluded from the cookie header.
pub const RESERVED_KEYS: [&str; 4] = [GAME_UID_KEY, GAME_REGION_KEY, AUTHKEY_KEY, AUTHKEY_UID_KEY];

/// Lowest and highest 9-digit game UID.
const GAME_UID_RANGE: std::ops::RangeInclusive<u64> = 100_000_000..=999_999_999;

/// Opaque per-user secret bundle.
///
/// Backed by a `BTreeMap` so serialization is canonical (sorted keys), which keeps
/// the encrypted form stable for identical input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialBundle(BTreeMap<String, String>);

impl CredentialBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a browser cookie string of the form `k=v; k=v`.
    ///
    /// Entries without `=` are ignored. Reserved bookkeeping keys are dropped so a
    /// pasted cookie cannot overwrite them.
    ///
    /// # Arguments
    /// - `raw` - Cookie string as copied from the browser
    ///
    /// # Returns
    /// - `Ok(CredentialBundle)` - Bundle containing every cookie entry
    /// - `Err(AppError::BadRequest)` - `ltuid_v2` or `ltoken_v2` is missing
    pub fn from_cookie(raw: &str) -> Result<Self, AppError> {
        let mut bundle = Self::new();

        for item in raw.split(';') {
            let Some((key, value)) = item.trim().split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() || RESERVED_KEYS.contains(&key) {
                continue;
            }
            bundle.insert(key, value.trim());
        }

        if !bundle.has_cookie() {
            return Err(AppError::BadRequest(format!(
                "The cookie must contain both `{}` and `{}`.",
                REQUIRED_COOKIE_KEYS[0], REQUIRED_COOKIE_KEYS[1]
            )));
        }

        Ok(bundle)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether both required cookie keys are present.
    pub fn has_cookie(&self) -> bool {
        REQUIRED_COOKIE_KEYS.iter().all(|k| self.0.contains_key(*k))
    }

    /// Builds the `Cookie` header value from the non-reserved entries.
    pub fn cookie_header(&self) -> String {
        self.0
            .iter()
            .filter(|(k, _)| !RESERVED_KEYS.contains(&k.as_str()))
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Game account cached when the credential was set, as `(uid, region)`.
    pub fn selected_account(&self) -> Option<(&str, &str)> {
        Some((self.get(GAME_UID_KEY)?, self.get(GAME_REGION_KEY)?))
    }

    pub fn set_selected_account(&mut self, account: &GameAccount) {
        self.insert(GAME_UID_KEY, account.game_uid.clone());
        self.insert(GAME_REGION_KEY, account.region.clone());
    }

    pub fn wish_auth(&self) -> Option<WishAuth> {
        let authkey = self.get(AUTHKEY_KEY)?;
        let uid = self.get(AUTHKEY_UID_KEY)?.parse().ok()?;
        Some(WishAuth {
            authkey: authkey.to_string(),
            uid,
        })
    }

    pub fn set_wish_auth(&mut self, auth: &WishAuth) {
        self.insert(AUTHKEY_KEY, auth.authkey.clone());
        self.insert(AUTHKEY_UID_KEY, auth.uid.to_string());
    }

    /// Copies the wish history authkey from `other`, if it has one.
    ///
    /// Used when a new cookie replaces an older bundle so the authkey survives.
    pub fn carry_wish_auth_from(&mut self, other: &CredentialBundle) {
        if let Some(auth) = other.wish_auth() {
            self.set_wish_auth(&auth);
        }
    }
}

/// Authkey and game UID used for the wish history endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishAuth {
    pub authkey: String,
    pub uid: u64,
}

impl WishAuth {
    /// Builds wish auth from user input.
    ///
    /// `authkey_or_url` may be the full wish history URL copied from the game or the
    /// bare authkey; the URL's `authkey` query parameter is percent-decoded.
    ///
    /// # Returns
    /// - `Ok(WishAuth)` - Extracted authkey and validated UID
    /// - `Err(AppError::BadRequest)` - UID is not 9 digits or the authkey is empty
    pub fn from_input(authkey_or_url: &str, uid: u64) -> Result<Self, AppError> {
        if !GAME_UID_RANGE.contains(&uid) {
            return Err(AppError::BadRequest(
                "The UID must be a 9-digit number.".to_string(),
            ));
        }

        let authkey = extract_authkey(authkey_or_url);
        if authkey.is_empty() {
            return Err(AppError::BadRequest("The authkey is empty.".to_string()));
        }

        Ok(Self { authkey, uid })
    }
}

/// Returns the `authkey` query parameter of a URL, or the trimmed input itself when
/// it carries none.
pub fn extract_authkey(input: &str) -> String {
    let input = input.trim();
    let query = input.split_once('?').map_or(input, |(_, q)| q);
    let query = query.split('#').next().unwrap_or(query);

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == AUTHKEY_KEY)
        .map(|(_, v)| v.into_owned())
        .unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cookie_string() {
        let bundle =
            CredentialBundle::from_cookie("ltuid_v2=12345; ltoken_v2=v2_abc=; mi18nLang=en-us")
                .unwrap();

        assert_eq!(bundle.get("ltuid_v2"), Some("12345"));
        // Only the first `=` separates key from value.
        assert_eq!(bundle.get("ltoken_v2"), Some("v2_abc="));
        assert_eq!(bundle.get("mi18nLang"), Some("en-us"));
    }

    #[test]
    fn rejects_cookie_without_required_keys() {
        let result = CredentialBundle::from_cookie("ltuid_v2=12345; account_id=1");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn pasted_cookie_cannot_set_reserved_keys() {
        let bundle =
            CredentialBundle::from_cookie("ltuid_v2=1; ltoken_v2=t; game_uid=999999999").unwrap();

        assert!(bundle.get("game_uid").is_none());
    }

    #[test]
    fn cookie_header_excludes_bookkeeping_keys() {
        let mut bundle = CredentialBundle::from_cookie("ltuid_v2=1; ltoken_v2=t").unwrap();
        bundle.set_wish_auth(&WishAuth {
            authkey: "secret".to_string(),
            uid: 800000000,
        });

        assert_eq!(bundle.cookie_header(), "ltoken_v2=t; ltuid_v2=1");
    }

    #[test]
    fn extracts_authkey_from_wish_url() {
        let url = "https://gs.hoyoverse.com/genshin/event/e20190909gacha-v3/index.html?\
                   win_mode=fullscreen&authkey_ver=1&authkey=abc%2Bdef%3D%3D&lang=en#/log";

        assert_eq!(extract_authkey(url), "abc+def==");
    }

    #[test]
    fn raw_authkey_is_kept_verbatim() {
        assert_eq!(extract_authkey("  abc/def==  "), "abc/def==");
    }

    #[test]
    fn wish_auth_requires_nine_digit_uid() {
        assert!(WishAuth::from_input("key", 12345678).is_err());
        assert!(WishAuth::from_input("key", 1_000_000_000).is_err());
        assert!(WishAuth::from_input("key", 800000001).is_ok());
    }

    #[test]
    fn new_cookie_keeps_existing_authkey() {
        let mut old = CredentialBundle::new();
        old.set_wish_auth(&WishAuth {
            authkey: "k".to_string(),
            uid: 800000001,
        });
        let mut new = CredentialBundle::from_cookie("ltuid_v2=1; ltoken_v2=t").unwrap();

        new.carry_wish_auth_from(&old);

        assert_eq!(new.wish_auth().map(|a| a.uid), Some(800000001));
    }
}
