use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MarketplaceError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_token_id(token_id: &str) -> Result<(), MarketplaceError> {
    if token_id.is_empty() {
        return Err(MarketplaceError::InvalidInput("Token ID must not be empty".into()));
    }
    if token_id.len() > MAX_TOKEN_ID_LEN {
        return Err(MarketplaceError::InvalidInput(format!(
            "Token ID too long (max {} characters)",
            MAX_TOKEN_ID_LEN
        )));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if actor_id != &self.owner_id {
            return Err(MarketplaceError::only_owner("contract owner"));
        }
        Ok(())
    }
}
