//! HoYoLAB account API gateway.
//!
//! Translates stored credential bundles into authenticated calls against the game
//! record, account, and gacha log APIs. Every call is a single round trip with the
//! client-level timeout; there are no retries. Remote failures are normalized into
//! `GatewayError` so callers only have to tell a rejected credential from anything
//! else.
//!
//! The `AccountGateway` trait is the seam the reminder sweeper and the command
//! controllers depend on, which lets tests replace the network with a fake.

use std::time::Duration;

use async_trait::async_trait;
use dioxus_logger::tracing;
use reqwest::{header, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    config::Config,
    error::gateway::GatewayError,
    model::{
        account::{Character, GameAccount, GENSHIN_GAME_BIZ},
        credential::{CredentialBundle, WishAuth},
        resin::{ResinStatus, TransformerStatus},
        wish::{BannerType, Wish},
    },
};

/// Retcodes meaning the cookie was rejected.
const INVALID_CREDENTIAL_RETCODES: [i64; 3] = [-100, 10001, 10103];
/// Retcode meaning the wish history authkey timed out.
const AUTHKEY_EXPIRED_RETCODE: i64 = -101;

/// Largest page the gacha log endpoint returns.
const WISH_PAGE_SIZE: usize = 20;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Remote account API used by the bot.
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Probes the API with `bundle` and lists the linked Genshin accounts.
    ///
    /// # Returns
    /// - `Ok(Vec<GameAccount>)` - At least one linked account
    /// - `Err(GatewayError::NoGameAccount)` - Credential valid but nothing linked
    /// - `Err(GatewayError::InvalidCredential)` - Credential rejected
    /// - `Err(GatewayError::Transient)` - Any other failure
    async fn validate_credential(
        &self,
        bundle: &CredentialBundle,
    ) -> Result<Vec<GameAccount>, GatewayError>;

    /// Fetches live resin and auxiliary counters for the bundle's selected account.
    async fn fetch_resource_status(
        &self,
        bundle: &CredentialBundle,
    ) -> Result<ResinStatus, GatewayError>;

    /// Fetches the owned characters of `account_id`, or of the selected account.
    async fn fetch_character_roster(
        &self,
        bundle: &CredentialBundle,
        account_id: Option<u64>,
    ) -> Result<Vec<Character>, GatewayError>;

    /// Fetches up to `limit` most recent wishes on `banner`, newest first.
    async fn fetch_wish_history(
        &self,
        auth: &WishAuth,
        banner: BannerType,
        limit: usize,
    ) -> Result<Vec<Wish>, GatewayError>;
}

/// Common response wrapper of every HoYoLAB endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    retcode: i64,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T, GatewayError> {
        if INVALID_CREDENTIAL_RETCODES.contains(&self.retcode) {
            return Err(GatewayError::InvalidCredential);
        }
        if self.retcode == AUTHKEY_EXPIRED_RETCODE {
            return Err(GatewayError::AuthkeyExpired);
        }
        if self.retcode != 0 {
            return Err(GatewayError::Transient(format!(
                "retcode {}: {}",
                self.retcode, self.message
            )));
        }

        self.data
            .ok_or_else(|| GatewayError::Transient("response has no data".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ListData<T> {
    list: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct GameRoleDto {
    game_biz: String,
    region: String,
    game_uid: String,
    #[serde(default)]
    nickname: String,
    #[serde(default)]
    level: i32,
    #[serde(default)]
    region_name: String,
}

#[derive(Debug, Deserialize)]
struct DailyNoteDto {
    current_resin: i32,
    max_resin: i32,
    /// Seconds as a decimal string.
    resin_recovery_time: String,
    #[serde(default)]
    finished_task_num: i32,
    #[serde(default)]
    total_task_num: i32,
    #[serde(default)]
    remain_resin_discount_num: i32,
    #[serde(default)]
    resin_discount_num_limit: i32,
    #[serde(default)]
    current_home_coin: i32,
    #[serde(default)]
    max_home_coin: i32,
    transformer: Option<TransformerDto>,
}

#[derive(Debug, Deserialize)]
struct TransformerDto {
    obtained: bool,
    recovery_time: Option<RecoveryTimeDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RecoveryTimeDto {
    #[serde(default)]
    day: i64,
    #[serde(default)]
    hour: i64,
    #[serde(default)]
    minute: i64,
    #[serde(default)]
    second: i64,
    #[serde(rename = "reached")]
    reached: bool,
}

#[derive(Debug, Deserialize)]
struct CharacterDto {
    id: u64,
    name: String,
    element: String,
    rarity: i32,
    level: i32,
    #[serde(default)]
    actived_constellation_num: i32,
}

#[derive(Debug, Deserialize)]
struct WishDto {
    id: String,
    name: String,
    item_type: String,
    /// Rarity as a decimal string.
    rank_type: String,
    time: String,
}

impl From<GameRoleDto> for GameAccount {
    fn from(dto: GameRoleDto) -> Self {
        Self {
            game_biz: dto.game_biz,
            region: dto.region,
            game_uid: dto.game_uid,
            nickname: dto.nickname,
            level: dto.level,
            region_name: dto.region_name,
        }
    }
}

impl From<CharacterDto> for Character {
    fn from(dto: CharacterDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            element: dto.element,
            rarity: dto.rarity,
            level: dto.level,
            constellation: dto.actived_constellation_num,
        }
    }
}

impl TryFrom<DailyNoteDto> for ResinStatus {
    type Error = GatewayError;

    fn try_from(dto: DailyNoteDto) -> Result<Self, Self::Error> {
        let resin_recovery_secs = dto.resin_recovery_time.trim().parse().map_err(|_| {
            GatewayError::Transient(format!(
                "invalid resin_recovery_time {:?}",
                dto.resin_recovery_time
            ))
        })?;

        let transformer = dto
            .transformer
            .filter(|t| t.obtained)
            .map(|t| match t.recovery_time {
                Some(r) => TransformerStatus {
                    ready: r.reached,
                    recovery_secs: ((r.day * 24 + r.hour) * 60 + r.minute) * 60 + r.second,
                },
                None => TransformerStatus {
                    ready: true,
                    recovery_secs: 0,
                },
            });

        Ok(Self {
            current_resin: dto.current_resin,
            max_resin: dto.max_resin,
            resin_recovery_secs,
            finished_commissions: dto.finished_task_num,
            total_commissions: dto.total_task_num,
            remaining_boss_discounts: dto.remain_resin_discount_num,
            boss_discount_limit: dto.resin_discount_num_limit,
            current_realm_currency: dto.current_home_coin,
            max_realm_currency: dto.max_home_coin,
            transformer,
        })
    }
}

impl TryFrom<WishDto> for Wish {
    type Error = GatewayError;

    fn try_from(dto: WishDto) -> Result<Self, Self::Error> {
        let rarity = dto
            .rank_type
            .parse()
            .map_err(|_| GatewayError::Transient(format!("invalid rank_type {:?}", dto.rank_type)))?;

        Ok(Self {
            id: dto.id,
            name: dto.name,
            item_type: dto.item_type,
            rarity,
            time: dto.time,
        })
    }
}

/// Server region of a Genshin UID, derived from its leading digit.
///
/// # Returns
/// - `Some(&str)` - Region code for the overseas servers
/// - `None` - UID belongs to no known overseas server
pub fn region_for_uid(uid: u64) -> Option<&'static str> {
    match uid / 100_000_000 {
        6 => Some("os_usa"),
        7 => Some("os_euro"),
        8 | 18 => Some("os_asia"),
        9 => Some("os_cht"),
        _ => None,
    }
}

/// `AccountGateway` backed by the public HoYoLAB HTTP API.
#[derive(Clone)]
pub struct HoyolabGateway {
    http: reqwest::Client,
    account_url: String,
    record_url: String,
    gacha_url: String,
}

impl HoyolabGateway {
    /// Creates a gateway with the endpoints and timeout from configuration.
    ///
    /// # Returns
    /// - `Ok(HoyolabGateway)` - Gateway ready for use
    /// - `Err(GatewayError::Transient)` - HTTP client could not be built
    pub fn from_config(config: &Config) -> Result<Self, GatewayError> {
        let http = build_http_client(config.gateway_timeout)?;

        Ok(Self::new(
            http,
            &config.hoyolab_account_url,
            &config.hoyolab_record_url,
            &config.hoyolab_gacha_url,
        ))
    }

    /// Creates a gateway over an existing client and explicit base URLs.
    pub fn new(http: reqwest::Client, account_url: &str, record_url: &str, gacha_url: &str) -> Self {
        Self {
            http,
            account_url: account_url.trim_end_matches('/').to_string(),
            record_url: record_url.trim_end_matches('/').to_string(),
            gacha_url: gacha_url.trim_end_matches('/').to_string(),
        }
    }

    /// Adds the headers every cookie-authenticated request carries.
    fn with_cookie(&self, request: RequestBuilder, bundle: &CredentialBundle) -> RequestBuilder {
        request
            .header(header::COOKIE, bundle.cookie_header())
            .header("x-rpc-language", "en-us")
    }

    /// Sends `request` and unwraps the response envelope.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transient(format!("HTTP {status}")));
        }

        let envelope: Envelope<T> = response.json().await?;
        envelope.into_data()
    }

    async fn game_roles(&self, bundle: &CredentialBundle) -> Result<Vec<GameAccount>, GatewayError> {
        let request = self
            .http
            .get(format!(
                "{}/binding/api/getUserGameRolesByCookie",
                self.account_url
            ))
            .query(&[("game_biz", GENSHIN_GAME_BIZ)]);

        let data: ListData<GameRoleDto> = self.send(self.with_cookie(request, bundle)).await?;

        Ok(data
            .list
            .into_iter()
            .filter(|r| r.game_biz == GENSHIN_GAME_BIZ)
            .map(GameAccount::from)
            .collect())
    }

    /// Resolves `(uid, region)` of the account to query.
    ///
    /// Uses the account cached in the bundle when present, otherwise asks the API
    /// for the linked roles and takes the first one.
    async fn resolve_account(
        &self,
        bundle: &CredentialBundle,
    ) -> Result<(String, String), GatewayError> {
        if let Some((uid, region)) = bundle.selected_account() {
            return Ok((uid.to_string(), region.to_string()));
        }

        let account = self
            .game_roles(bundle)
            .await?
            .into_iter()
            .next()
            .ok_or(GatewayError::NoGameAccount)?;

        Ok((account.game_uid, account.region))
    }
}

#[async_trait]
impl AccountGateway for HoyolabGateway {
    async fn validate_credential(
        &self,
        bundle: &CredentialBundle,
    ) -> Result<Vec<GameAccount>, GatewayError> {
        let accounts = self.game_roles(bundle).await?;

        if accounts.is_empty() {
            return Err(GatewayError::NoGameAccount);
        }

        Ok(accounts)
    }

    async fn fetch_resource_status(
        &self,
        bundle: &CredentialBundle,
    ) -> Result<ResinStatus, GatewayError> {
        let (uid, region) = self.resolve_account(bundle).await?;

        let request = self
            .http
            .get(format!(
                "{}/game_record/genshin/api/dailyNote",
                self.record_url
            ))
            .query(&[("server", region.as_str()), ("role_id", uid.as_str())]);

        let note: DailyNoteDto = self.send(self.with_cookie(request, bundle)).await?;

        ResinStatus::try_from(note)
    }

    async fn fetch_character_roster(
        &self,
        bundle: &CredentialBundle,
        account_id: Option<u64>,
    ) -> Result<Vec<Character>, GatewayError> {
        let (uid, region) = match account_id {
            Some(uid) => {
                let region = region_for_uid(uid).ok_or(GatewayError::NoGameAccount)?;
                (uid.to_string(), region.to_string())
            }
            None => self.resolve_account(bundle).await?,
        };

        let request = self
            .http
            .post(format!(
                "{}/game_record/genshin/api/character/list",
                self.record_url
            ))
            .json(&serde_json::json!({ "role_id": uid, "server": region }));

        let data: ListData<CharacterDto> = self.send(self.with_cookie(request, bundle)).await?;

        Ok(data.list.into_iter().map(Character::from).collect())
    }

    async fn fetch_wish_history(
        &self,
        auth: &WishAuth,
        banner: BannerType,
        limit: usize,
    ) -> Result<Vec<Wish>, GatewayError> {
        let mut wishes = Vec::with_capacity(limit);
        let mut end_id = "0".to_string();

        while wishes.len() < limit {
            let size = (limit - wishes.len()).min(WISH_PAGE_SIZE).to_string();
            let gacha_type = banner.gacha_type().to_string();

            let request = self
                .http
                .get(format!("{}/gacha_info/api/getGachaLog", self.gacha_url))
                .header("x-rpc-language", "en-us")
                .query(&[
                    ("authkey_ver", "1"),
                    ("sign_type", "2"),
                    ("lang", "en"),
                    ("game_biz", GENSHIN_GAME_BIZ),
                    ("authkey", auth.authkey.as_str()),
                    ("gacha_type", gacha_type.as_str()),
                    ("page", "1"),
                    ("size", size.as_str()),
                    ("end_id", end_id.as_str()),
                ]);

            let page: ListData<WishDto> = self.send(request).await?;
            let Some(last) = page.list.last() else {
                break;
            };
            end_id = last.id.clone();

            let fetched = page.list.len();
            for dto in page.list {
                wishes.push(Wish::try_from(dto)?);
            }

            if fetched < WISH_PAGE_SIZE {
                break;
            }
        }

        wishes.truncate(limit);
        tracing::debug!(
            "Fetched {} wishes on {} for UID {}",
            wishes.len(),
            banner.label(),
            auth.uid
        );

        Ok(wishes)
    }
}

/// Builds the shared HTTP client with the per-call timeout.
fn build_http_client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(GatewayError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn gateway(server: &mockito::ServerGuard) -> HoyolabGateway {
        let url = server.url();
        HoyolabGateway::new(reqwest::Client::new(), &url, &url, &url)
    }

    fn bundle() -> CredentialBundle {
        CredentialBundle::from_cookie("ltuid_v2=1; ltoken_v2=t").unwrap()
    }

    fn roles_body() -> String {
        serde_json::json!({
            "retcode": 0,
            "message": "OK",
            "data": { "list": [
                {
                    "game_biz": "hk4e_global",
                    "region": "os_asia",
                    "game_uid": "800000001",
                    "nickname": "Traveler",
                    "level": 60,
                    "region_name": "Asia Server"
                }
            ]}
        })
        .to_string()
    }

    fn daily_note_body(current: i32) -> String {
        serde_json::json!({
            "retcode": 0,
            "message": "OK",
            "data": {
                "current_resin": current,
                "max_resin": 200,
                "resin_recovery_time": "4800",
                "finished_task_num": 3,
                "total_task_num": 4,
                "remain_resin_discount_num": 2,
                "resin_discount_num_limit": 3,
                "current_home_coin": 1200,
                "max_home_coin": 2400,
                "transformer": {
                    "obtained": true,
                    "recovery_time": {
                        "Day": 1, "Hour": 2, "Minute": 0, "Second": 0, "reached": false
                    }
                }
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn validate_credential_lists_genshin_accounts() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/binding/api/getUserGameRolesByCookie")
            .match_query(Matcher::UrlEncoded(
                "game_biz".into(),
                "hk4e_global".into(),
            ))
            .match_header("cookie", "ltoken_v2=t; ltuid_v2=1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(roles_body())
            .create_async()
            .await;

        let accounts = gateway(&server).validate_credential(&bundle()).await.unwrap();

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].game_uid, "800000001");
        assert_eq!(accounts[0].region, "os_asia");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_cookie_is_invalid_credential() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/binding/api/getUserGameRolesByCookie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"retcode":-100,"message":"Please login","data":null}"#)
            .create_async()
            .await;

        let result = gateway(&server).validate_credential(&bundle()).await;

        assert_eq!(result, Err(GatewayError::InvalidCredential));
    }

    #[tokio::test]
    async fn empty_role_list_is_no_game_account() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/binding/api/getUserGameRolesByCookie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"retcode":0,"message":"OK","data":{"list":[]}}"#)
            .create_async()
            .await;

        let result = gateway(&server).validate_credential(&bundle()).await;

        assert_eq!(result, Err(GatewayError::NoGameAccount));
    }

    #[tokio::test]
    async fn server_error_is_transient() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/binding/api/getUserGameRolesByCookie")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let result = gateway(&server).validate_credential(&bundle()).await;

        assert!(matches!(result, Err(GatewayError::Transient(_))));
    }

    /// Tests that a cached account skips the role lookup.
    ///
    /// Expected: one daily note call with the cached uid and region
    #[tokio::test]
    async fn resource_status_uses_cached_account() {
        let mut server = mockito::Server::new_async().await;
        let note = server
            .mock("GET", "/game_record/genshin/api/dailyNote")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("server".into(), "os_asia".into()),
                Matcher::UrlEncoded("role_id".into(), "800000001".into()),
            ]))
            .with_status(200)
            .with_body(daily_note_body(190))
            .expect(1)
            .create_async()
            .await;
        let roles = server
            .mock("GET", "/binding/api/getUserGameRolesByCookie")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let mut bundle = bundle();
        bundle.set_selected_account(&GameAccount {
            game_biz: "hk4e_global".to_string(),
            region: "os_asia".to_string(),
            game_uid: "800000001".to_string(),
            nickname: String::new(),
            level: 60,
            region_name: String::new(),
        });

        let status = gateway(&server)
            .fetch_resource_status(&bundle)
            .await
            .unwrap();

        assert_eq!(status.current_resin, 190);
        assert_eq!(status.max_resin, 200);
        assert_eq!(status.resin_recovery_secs, 4800);
        assert_eq!(status.finished_commissions, 3);
        assert_eq!(
            status.transformer,
            Some(TransformerStatus {
                ready: false,
                recovery_secs: 26 * 3600,
            })
        );
        note.assert_async().await;
        roles.assert_async().await;
    }

    #[tokio::test]
    async fn resource_status_resolves_account_when_not_cached() {
        let mut server = mockito::Server::new_async().await;
        let _roles = server
            .mock("GET", "/binding/api/getUserGameRolesByCookie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(roles_body())
            .create_async()
            .await;
        let note = server
            .mock("GET", "/game_record/genshin/api/dailyNote")
            .match_query(Matcher::UrlEncoded("role_id".into(), "800000001".into()))
            .with_status(200)
            .with_body(daily_note_body(40))
            .create_async()
            .await;

        let status = gateway(&server)
            .fetch_resource_status(&bundle())
            .await
            .unwrap();

        assert_eq!(status.current_resin, 40);
        note.assert_async().await;
    }

    #[tokio::test]
    async fn character_roster_posts_explicit_account() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/game_record/genshin/api/character/list")
            .match_body(Matcher::Json(serde_json::json!({
                "role_id": "700000002",
                "server": "os_euro"
            })))
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "retcode": 0,
                    "message": "OK",
                    "data": { "list": [
                        {
                            "id": 10000046,
                            "name": "Hu Tao",
                            "element": "Pyro",
                            "rarity": 5,
                            "level": 90,
                            "actived_constellation_num": 1
                        }
                    ]}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let roster = gateway(&server)
            .fetch_character_roster(&bundle(), Some(700000002))
            .await
            .unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Hu Tao");
        assert_eq!(roster[0].constellation, 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn expired_authkey_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/gacha_info/api/getGachaLog")
            .match_query(Matcher::UrlEncoded("authkey".into(), "a+b==".into()))
            .with_status(200)
            .with_body(r#"{"retcode":-101,"message":"authkey timeout","data":null}"#)
            .create_async()
            .await;

        let auth = WishAuth {
            authkey: "a+b==".to_string(),
            uid: 800000001,
        };
        let result = gateway(&server)
            .fetch_wish_history(&auth, BannerType::Character, 1)
            .await;

        assert_eq!(result, Err(GatewayError::AuthkeyExpired));
    }

    #[tokio::test]
    async fn wish_history_parses_rarity() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/gacha_info/api/getGachaLog")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("gacha_type".into(), "302".into()),
                Matcher::UrlEncoded("size".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "retcode": 0,
                    "message": "OK",
                    "data": { "list": [
                        { "uid": "800000001", "gacha_type": "302", "item_id": "", "count": "1",
                          "time": "2025-01-02 10:00:00", "name": "Staff of Homa",
                          "item_type": "Weapon", "rank_type": "5", "id": "2" },
                        { "uid": "800000001", "gacha_type": "302", "item_id": "", "count": "1",
                          "time": "2025-01-01 10:00:00", "name": "Slingshot",
                          "item_type": "Weapon", "rank_type": "3", "id": "1" }
                    ]}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let auth = WishAuth {
            authkey: "key".to_string(),
            uid: 800000001,
        };
        let wishes = gateway(&server)
            .fetch_wish_history(&auth, BannerType::Weapon, 2)
            .await
            .unwrap();

        assert_eq!(wishes.len(), 2);
        assert_eq!(wishes[0].name, "Staff of Homa");
        assert_eq!(wishes[0].rarity, 5);
        assert_eq!(wishes[1].rarity, 3);
    }

    #[test]
    fn region_follows_leading_uid_digit() {
        assert_eq!(region_for_uid(600000000), Some("os_usa"));
        assert_eq!(region_for_uid(712345678), Some("os_euro"));
        assert_eq!(region_for_uid(812345678), Some("os_asia"));
        assert_eq!(region_for_uid(912345678), Some("os_cht"));
        assert_eq!(region_for_uid(112345678), None);
    }
}
