//! The toy valuation: PV of one million USD received at a maturity.

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument};

use toyval_config::ClientConfig;
use toyval_core::calendars::DEFAULT_MATURITY_CONVENTION;
use toyval_core::{Currency, Date, Direction, MaturitySpec};
use toyval_graph::{Handle, Session, ValuationNode};
use toyval_traits::{Document, PlatformClient, ResultTable, ValuationSpecification};

use crate::error::{ValuationError, ValuationResult};
use crate::factory::platform_client;
use crate::validation::{check_maturity, check_rate};

/// Cashflow amount.
pub const NOTIONAL: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Output measure requested from `ValueProduct`.
pub const OUTPUT_NAME: &str = "Value";

/// Position of the PV in the returned table.
const RESULT_ROW: usize = 0;
const RESULT_COLUMN: usize = 1;

/// Inputs of one valuation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRequest {
    /// Annually compounded ACT/365F discount rate.
    pub rate: f64,
    /// Explicit date or tenor.
    pub maturity: MaturitySpec,
    /// Maturity convention name. `None` uses the client's default.
    pub convention: Option<String>,
    /// Anchor date. `None` means today.
    pub as_of: Option<Date>,
}

impl ValuationRequest {
    /// Creates a request with the default convention, as of today.
    pub fn new(rate: f64, maturity: impl Into<MaturitySpec>) -> Self {
        Self {
            rate,
            maturity: maturity.into(),
            convention: None,
            as_of: None,
        }
    }

    /// Sets the maturity convention.
    pub fn with_convention(mut self, convention: impl Into<String>) -> Self {
        self.convention = Some(convention.into());
        self
    }

    /// Sets the anchor date.
    pub fn as_of(mut self, today: Date) -> Self {
        self.as_of = Some(today);
        self
    }
}

/// Values single cashflows through an injected Platform client.
///
/// Holds no per-call state: concurrent calls each build and submit their own
/// graph.
#[derive(Clone)]
pub struct ValuationClient {
    client: Arc<dyn PlatformClient>,
    default_convention: String,
}

impl ValuationClient {
    /// Creates a client over an existing Platform client.
    pub fn new(client: Arc<dyn PlatformClient>) -> Self {
        Self {
            client,
            default_convention: DEFAULT_MATURITY_CONVENTION.to_string(),
        }
    }

    /// Builds the Platform client described by `config`.
    pub fn from_config(config: &ClientConfig) -> ValuationResult<Self> {
        let client = platform_client(config)?;
        Ok(Self::new(client).with_default_convention(config.default_convention.clone()))
    }

    /// Overrides the convention used when a request names none.
    pub fn with_default_convention(mut self, convention: impl Into<String>) -> Self {
        self.default_convention = convention.into();
        self
    }

    /// Convention used when a request names none.
    pub fn default_convention(&self) -> &str {
        &self.default_convention
    }

    /// The underlying Platform client.
    pub fn platform(&self) -> &Arc<dyn PlatformClient> {
        &self.client
    }

    /// PV of 1,000,000 USD received at `maturity`, discounted flat at `rate`,
    /// as of today.
    pub async fn toy_valuation(
        &self,
        rate: f64,
        maturity: impl Into<MaturitySpec>,
        convention: &str,
    ) -> ValuationResult<f64> {
        self.toy_valuation_as_of(Date::today(), rate, maturity, convention)
            .await
    }

    /// [`toy_valuation`](Self::toy_valuation) with an explicit anchor date.
    pub async fn toy_valuation_as_of(
        &self,
        today: Date,
        rate: f64,
        maturity: impl Into<MaturitySpec>,
        convention: &str,
    ) -> ValuationResult<f64> {
        let maturity = maturity.into();
        self.run(today, rate, &maturity, convention).await
    }

    /// Values a request, filling in defaults.
    pub async fn value(&self, request: &ValuationRequest) -> ValuationResult<f64> {
        let today = request.as_of.unwrap_or_else(Date::today);
        self.run(today, request.rate, &request.maturity, self.convention_of(request))
            .await
    }

    /// Blocking form of [`toy_valuation`](Self::toy_valuation).
    ///
    /// Must not be called from inside an async runtime.
    pub fn toy_valuation_blocking(
        &self,
        rate: f64,
        maturity: impl Into<MaturitySpec>,
        convention: &str,
    ) -> ValuationResult<f64> {
        self.value_blocking(&ValuationRequest::new(rate, maturity).with_convention(convention))
    }

    /// Blocking form of [`value`](Self::value).
    ///
    /// Must not be called from inside an async runtime.
    pub fn value_blocking(&self, request: &ValuationRequest) -> ValuationResult<f64> {
        let today = request.as_of.unwrap_or_else(Date::today);
        let (session, root) = self.build(
            today,
            request.rate,
            &request.maturity,
            self.convention_of(request),
        )?;
        let table = session.wait(&root)?;
        extract(&table)
    }

    /// The document a request would submit, without submitting it.
    pub fn document(&self, request: &ValuationRequest) -> ValuationResult<Document> {
        let today = request.as_of.unwrap_or_else(Date::today);
        let (session, root) = self.build(
            today,
            request.rate,
            &request.maturity,
            self.convention_of(request),
        )?;
        Ok(session.document(&root)?)
    }

    fn convention_of<'a>(&'a self, request: &'a ValuationRequest) -> &'a str {
        request
            .convention
            .as_deref()
            .unwrap_or(&self.default_convention)
    }

    #[instrument(skip(self), fields(client = self.client.name()))]
    async fn run(
        &self,
        today: Date,
        rate: f64,
        maturity: &MaturitySpec,
        convention: &str,
    ) -> ValuationResult<f64> {
        let (session, root) = self.build(today, rate, maturity, convention)?;
        let table = session.evaluate(&root).await?;
        let pv = extract(&table)?;
        debug!(pv, "Valuation complete");
        Ok(pv)
    }

    /// Checks inputs and builds the lazy graph. Nothing is submitted.
    fn build(
        &self,
        today: Date,
        rate: f64,
        maturity: &MaturitySpec,
        convention: &str,
    ) -> ValuationResult<(Session, Handle<ValuationNode>)> {
        check_rate(rate)?;
        check_maturity(maturity)?;

        let session = Session::new(Arc::clone(&self.client));
        let maturity_date = session.maturity_date(today, maturity.clone(), convention);
        let product = session.create_single_cashflow_product(
            Direction::Receive,
            NOTIONAL,
            Currency::USD,
            &maturity_date,
        );
        let model = session.add_simple_discount_curve_to_model(None, Currency::USD, today, rate);
        let value = session.value_product(
            &model,
            &product,
            ValuationSpecification::ClosedForm,
            OUTPUT_NAME,
        );
        Ok((session, value))
    }
}

impl std::fmt::Debug for ValuationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValuationClient")
            .field("client", &self.client.name())
            .field("default_convention", &self.default_convention)
            .finish()
    }
}

/// Reads the PV at row 0, column 1.
fn extract(table: &ResultTable) -> ValuationResult<f64> {
    let cell = table.get(RESULT_ROW, RESULT_COLUMN);
    cell.and_then(|c| c.as_number())
        .ok_or_else(|| ValuationError::ResultShape {
            row: RESULT_ROW,
            column: RESULT_COLUMN,
            found: cell.map_or_else(|| "nothing".to_string(), |c| c.kind().to_string()),
        })
}
