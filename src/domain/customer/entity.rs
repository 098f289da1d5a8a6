use super::errors::CustomerError;
use super::value_objects::Address;

// ============================================================================
// Customer Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u32,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Rebuild a customer from persisted state
    pub fn restore(
        id: impl Into<String>,
        name: impl Into<String>,
        address: Option<Address>,
        active: bool,
        reward_points: u32,
    ) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address,
            active,
            reward_points,
        };
        customer.validate()?;
        if customer.active && customer.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn reward_points(&self) -> u32 {
        self.reward_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u32) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
