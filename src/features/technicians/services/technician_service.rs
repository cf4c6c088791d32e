use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::technicians::dtos::{TechnicianDto, TechnicianStatsDto};
use crate::features::technicians::filter::TechnicianFilter;
use crate::modules::store::RecordStore;
use crate::shared::filtering::apply_filter;
use crate::shared::stats::{average_one_decimal, count_by};

pub struct TechnicianService {
    store: Arc<RecordStore>,
}

impl TechnicianService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Returns (technicians, total_count)
    pub fn list(&self, filter: &TechnicianFilter) -> (Vec<TechnicianDto>, usize) {
        let technicians: Vec<TechnicianDto> = apply_filter(self.store.technicians(), filter)
            .into_iter()
            .map(TechnicianDto::from)
            .collect();
        let total = technicians.len();
        (technicians, total)
    }

    pub fn get(&self, id: &str) -> Result<TechnicianDto> {
        self.store
            .find_technician(id)
            .map(TechnicianDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Technician {} not found", id)))
    }

    pub fn stats(&self) -> TechnicianStatsDto {
        let technicians = self.store.technicians();
        TechnicianStatsDto {
            total: technicians.len(),
            by_status: count_by(technicians, |t| t.status),
            current_assignments: technicians
                .iter()
                .map(|t| u64::from(t.current_assigned_count))
                .sum(),
            average_rating: average_one_decimal(technicians.iter().map(|t| t.rating)),
        }
    }
}
