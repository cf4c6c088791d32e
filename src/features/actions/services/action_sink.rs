use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::actions::models::{ActionReceipt, DashboardAction};

/// Destination for administrator actions
#[async_trait]
pub trait ActionSink: Send + Sync {
    /// Record an action and acknowledge it
    async fn submit(&self, action: DashboardAction) -> Result<ActionReceipt>;

    /// Receipts still held by the sink, oldest first
    async fn receipts(&self) -> Result<Vec<ActionReceipt>>;
}

/// Sink that logs each action and keeps a bounded journal of receipts
pub struct JournalActionSink {
    capacity: usize,
    journal: RwLock<VecDeque<ActionReceipt>>,
}

impl JournalActionSink {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            journal: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl ActionSink for JournalActionSink {
    async fn submit(&self, action: DashboardAction) -> Result<ActionReceipt> {
        let receipt = ActionReceipt::new(action);

        tracing::info!(
            action_id = %receipt.action_id,
            kind = receipt.action.kind(),
            subject = receipt.action.subject(),
            "Action received: {:?}",
            receipt.action
        );

        let mut journal = self.journal.write().await;
        if journal.len() == self.capacity {
            journal.pop_front();
        }
        journal.push_back(receipt.clone());

        Ok(receipt)
    }

    async fn receipts(&self) -> Result<Vec<ActionReceipt>> {
        let journal = self.journal.read().await;
        Ok(journal.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(report_id: &str) -> DashboardAction {
        DashboardAction::AssignmentRequested {
            report_id: report_id.to_string(),
            technician_id: "TECH-001".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_returns_receipt_and_journals_it() {
        let sink = JournalActionSink::new(10);

        let receipt = sink.submit(assignment("RPT-001")).await.unwrap();
        let receipts = sink.receipts().await.unwrap();

        assert_eq!(receipts, vec![receipt]);
    }

    #[tokio::test]
    async fn test_journal_evicts_oldest_at_capacity() {
        let sink = JournalActionSink::new(2);

        sink.submit(assignment("RPT-001")).await.unwrap();
        sink.submit(assignment("RPT-002")).await.unwrap();
        sink.submit(assignment("RPT-003")).await.unwrap();

        let subjects: Vec<String> = sink
            .receipts()
            .await
            .unwrap()
            .iter()
            .map(|r| r.action.subject().to_string())
            .collect();
        assert_eq!(subjects, vec!["RPT-002", "RPT-003"]);
    }

    #[test]
    fn test_zero_capacity_still_keeps_latest() {
        let sink = JournalActionSink::new(0);

        let receipts = tokio_test::block_on(async {
            sink.submit(assignment("RPT-001")).await.unwrap();
            sink.submit(assignment("RPT-002")).await.unwrap();
            sink.receipts().await.unwrap()
        });

        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].action.subject(), "RPT-002");
    }
}
