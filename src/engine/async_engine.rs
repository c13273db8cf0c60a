use crate::assessment::RiskAssessmentPipeline;
use crate::engine::record::{AssessmentRecord, TransactionRecord};
use crate::history::HistoryProvider;
use crate::models::{RiskAssessment, Transaction};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, Write};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::{spawn_blocking, JoinHandle, JoinSet};
use tracing::{debug, error, info, warn};

/// A transaction paired with its assessment, tagged with its position in the input.
#[derive(Debug, Clone)]
pub struct AssessedTransaction {
    pub sequence: usize,
    pub transaction: Transaction,
    pub assessment: RiskAssessment
}

/// Replays a CSV file of transactions through the risk pipeline.
pub struct AsyncEngine<H: HistoryProvider + ?Sized> {
    pipeline: Arc<RiskAssessmentPipeline<H>>,
    backpressure: usize,
    max_in_flight: usize
}

impl<H: HistoryProvider + ?Sized> AsyncEngine<H> {
    /// Creates a new engine around a shared pipeline.
    pub fn new(pipeline: Arc<RiskAssessmentPipeline<H>>) -> Self {
        Self {
            pipeline,
            backpressure: 256,
            max_in_flight: 64
        }
    }

    /// Capacity of the channel between the CSV reader and the assessment tasks.
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Upper bound on concurrently running assessments.
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    /// Assesses every readable transaction in the file, returning results in input order.
    pub async fn run(&self, path: &str) -> anyhow::Result<Vec<AssessedTransaction>> {
        let (sender, receiver) = mpsc::channel::<(usize, Transaction)>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let processing_result = self.assess_transactions(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        processing_result
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<(usize, Transaction)>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for (sequence, result) in reader.deserialize::<TransactionRecord>().enumerate() {
                match result {
                    Ok(record) => {
                        if sender.blocking_send((sequence, record.into())).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("CSV deserialization error, row skipped: {error}");
                    }
                }
            }
        })
    }

    async fn assess_transactions(&self, mut receiver: mpsc::Receiver<(usize, Transaction)>) -> anyhow::Result<Vec<AssessedTransaction>> {
        let in_flight = Arc::new(Semaphore::new(self.max_in_flight));
        let mut tasks = JoinSet::new();

        while let Some((sequence, transaction)) = receiver.recv().await {
            let permit = in_flight.clone().acquire_owned().await?;
            let pipeline = self.pipeline.clone();

            tasks.spawn(async move {
                let assessment = pipeline.assess(&transaction).await;
                drop(permit);

                AssessedTransaction {
                    sequence,
                    transaction,
                    assessment
                }
            });
        }

        let mut results = Vec::with_capacity(tasks.len());

        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(assessed) => {
                    debug!("Transaction [{}] assessed as {}", assessed.transaction.transaction_id, assessed.assessment.level);
                    results.push(assessed);
                }
                Err(error) => {
                    error!("An assessment task did not complete: {error}");
                }
            }
        }

        results.sort_by_key(|assessed| assessed.sequence);

        let alerts = results.iter().filter(|assessed| assessed.assessment.create_alert).count();
        info!("Assessed {} transactions, {} flagged for alerts", results.len(), alerts);

        Ok(results)
    }
}

/// Writes assessments as CSV with a header row.
pub fn write_assessments<W: Write>(writer: W, results: &[AssessedTransaction]) -> anyhow::Result<()> {
    let mut output = WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    output.write_record(AssessmentRecord::HEADERS)?;

    for assessed in results {
        output.serialize(AssessmentRecord::from(assessed))?;
    }

    output.flush()?;

    Ok(())
}
