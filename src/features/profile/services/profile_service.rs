use std::sync::Arc;

use crate::features::profile::dtos::ProfileDto;
use crate::modules::store::RecordStore;

pub struct ProfileService {
    store: Arc<RecordStore>,
}

impl ProfileService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub fn get_profile(&self) -> ProfileDto {
        ProfileDto::from(self.store.admin())
    }
}
