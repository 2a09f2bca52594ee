//! Membership Table
//!
//! Fixed roster of pool members. The position of an address in the roster
//! is its index for the lifetime of the pool; rotational pools pay out in
//! this order.

use savings_errors::ContractError;
use soroban_sdk::{contracttype, Address, Env, Map, Vec};

/// Upper bound on roster size; caps iteration in payouts and yield splits.
pub const MAX_MEMBERS: u32 = 50;

/// Ordered, deduplicated member list stored once at pool creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Membership {
    pub members: Vec<Address>,
}

impl Membership {
    /// Build the roster from a caller-supplied list.
    ///
    /// # Errors
    /// * `InvalidMembers` - list is empty, exceeds `MAX_MEMBERS`, or repeats an address
    pub fn new(e: &Env, members: Vec<Address>) -> Result<Self, ContractError> {
        let count = members.len();
        if count == 0 || count > MAX_MEMBERS {
            return Err(ContractError::InvalidMembers);
        }

        let mut seen: Map<Address, bool> = Map::new(e);
        for member in members.iter() {
            if seen.contains_key(member.clone()) {
                return Err(ContractError::InvalidMembers);
            }
            seen.set(member, true);
        }

        Ok(Self { members })
    }

    pub fn count(&self) -> u32 {
        self.members.len()
    }

    pub fn is_member(&self, id: &Address) -> bool {
        self.members.contains(id)
    }

    /// Position of `id` in the roster.
    pub fn index_of(&self, id: &Address) -> Result<u32, ContractError> {
        self.members
            .first_index_of(id)
            .ok_or(ContractError::NotMember)
    }

    /// Members in roster order.
    pub fn iter(&self) -> impl Iterator<Item = Address> {
        self.members.iter()
    }

    /// Member at `index`, if the roster is that long.
    pub fn get(&self, index: u32) -> Option<Address> {
        self.members.get(index)
    }

    /// Fails with `NotMember` unless `id` is on the roster.
    pub fn require_member(&self, id: &Address) -> Result<(), ContractError> {
        if !self.is_member(id) {
            return Err(ContractError::NotMember);
        }
        Ok(())
    }
}
