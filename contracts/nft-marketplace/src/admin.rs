use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, config: Option<MarketConfig>) -> Self {
        let config = config.unwrap_or_default();
        if let Err(e) = config.validate() {
            env::panic_str(&e.to_string());
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            config,
            listings: ListingLedger::new(),
            proceeds: ProceedsLedger::new(),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, update: MarketConfigUpdate) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.config.validate_patch(&update)?;
        self.config.apply_patch(&update);
        events::emit_config_updated(&self.owner_id, &self.config);
        Ok(())
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn get_config(&self) -> MarketConfig {
        self.config.clone()
    }

    pub fn get_version(&self) -> String {
        self.version.clone()
    }
}
