use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use test_utils::builder::TestBuilder;

use crate::{
    crypto::CredentialCipher,
    error::gateway::GatewayError,
    model::{
        account::{Character, GameAccount},
        credential::{CredentialBundle, WishAuth},
        resin::ResinStatus,
        wish::{BannerType, Wish},
    },
    service::{credential::CredentialStore, hoyolab::AccountGateway},
    state::AppState,
};

/// Gateway returning fixed answers and recording the last wish auth it saw.
pub struct StubGateway {
    pub accounts: Result<Vec<GameAccount>, GatewayError>,
    pub status: Result<ResinStatus, GatewayError>,
    pub roster: Result<Vec<Character>, GatewayError>,
    pub wishes: Result<Vec<Wish>, GatewayError>,
    pub seen_auth: Mutex<Option<WishAuth>>,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            accounts: Ok(vec![account()]),
            status: Ok(status(120)),
            roster: Ok(Vec::new()),
            wishes: Ok(Vec::new()),
            seen_auth: Mutex::new(None),
        }
    }
}

#[async_trait]
impl AccountGateway for StubGateway {
    async fn validate_credential(
        &self,
        _bundle: &CredentialBundle,
    ) -> Result<Vec<GameAccount>, GatewayError> {
        self.accounts.clone()
    }

    async fn fetch_resource_status(
        &self,
        _bundle: &CredentialBundle,
    ) -> Result<ResinStatus, GatewayError> {
        self.status.clone()
    }

    async fn fetch_character_roster(
        &self,
        _bundle: &CredentialBundle,
        _account_id: Option<u64>,
    ) -> Result<Vec<Character>, GatewayError> {
        self.roster.clone()
    }

    async fn fetch_wish_history(
        &self,
        auth: &WishAuth,
        _banner: BannerType,
        limit: usize,
    ) -> Result<Vec<Wish>, GatewayError> {
        *self.seen_auth.lock().unwrap() = Some(auth.clone());
        self.wishes
            .clone()
            .map(|w| w.into_iter().take(limit).collect())
    }
}

pub fn account() -> GameAccount {
    GameAccount {
        game_biz: "hk4e_global".to_string(),
        region: "os_asia".to_string(),
        game_uid: "812345678".to_string(),
        nickname: "Traveler".to_string(),
        level: 60,
        region_name: "Asia Server".to_string(),
    }
}

pub fn status(current: i32) -> ResinStatus {
    ResinStatus {
        current_resin: current,
        max_resin: 200,
        resin_recovery_secs: i64::from(200 - current) * 480,
        finished_commissions: 4,
        total_commissions: 4,
        remaining_boss_discounts: 1,
        boss_discount_limit: 3,
        current_realm_currency: 1200,
        max_realm_currency: 2400,
        transformer: None,
    }
}

pub fn cookie() -> CredentialBundle {
    CredentialBundle::from_cookie("ltuid_v2=1234; ltoken_v2=v2_token").unwrap()
}

pub async fn state(gateway: StubGateway) -> AppState {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let store = CredentialStore::new(test.db.unwrap(), CredentialCipher::new([9u8; 32]));

    AppState::new(store, Arc::new(gateway))
}
