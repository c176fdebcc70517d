//! Material cost arithmetic and the gold-price mass update worksheet
//!
//! All arithmetic is done in `Decimal` and converted back to `f64` rounded
//! to 2 decimal places, the same way every money value in this crate is
//! handled.

use rust_decimal::prelude::*;
use shared::models::{CostSummary, Material, StockDetail, StockEditItem};

use crate::error::{ClientError, ClientResult};
use crate::stores::StockStore;

const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

const CURRENCY_SYMBOL: &str = "฿";

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Compare two monetary values within 0.01
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}

/// `(weight + weight × waste/100) × price`
pub fn material_cost(weight: f64, waste_percent: f64, price: f64) -> f64 {
    let weight = to_decimal(weight);
    let waste = weight * to_decimal(waste_percent) / Decimal::ONE_HUNDRED;
    to_f64((weight + waste) * to_decimal(price))
}

/// Cost of a gold line at the given price; missing numbers count as zero
pub fn gold_cost(material: &Material, price: f64) -> f64 {
    material_cost(
        material.weight.unwrap_or_default(),
        material.waste_percent.unwrap_or_default(),
        price,
    )
}

/// `used × (1 − discount/100)`
pub fn discounted_cost(used_cost: f64, discount_percent: f64) -> f64 {
    let factor = Decimal::ONE - to_decimal(discount_percent) / Decimal::ONE_HUNDRED;
    to_f64(to_decimal(used_cost) * factor)
}

/// Cost summary block for a set of material lines
pub fn summarize(materials: &[Material], discount_percent: f64) -> CostSummary {
    let actual: Decimal = materials
        .iter()
        .map(|m| to_decimal(m.recorded_cost()))
        .sum();
    let actual = to_f64(actual);
    CostSummary {
        actual_cost: Some(actual),
        used_cost: Some(actual),
        final_cost: Some(discounted_cost(actual, discount_percent)),
        discount_percent: Some(discount_percent),
    }
}

/// Split a pasted list of stock numbers
///
/// Commas, spaces and newlines all separate; duplicates keep their first
/// position.
pub fn parse_stock_numbers(input: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect()
}

/// "฿15,000.00"; `None` reads as zero
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = to_decimal(amount.unwrap_or_default())
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-{CURRENCY_SYMBOL}{}", group_thousands(amount.abs()))
    } else {
        format!("{CURRENCY_SYMBOL}{}", group_thousands(amount.abs()))
    }
}

/// "+฿1,000.00" / "-฿1,000.00"; zero carries no sign
pub fn format_difference(amount: f64) -> String {
    let rounded = to_decimal(amount)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        format_currency(Some(0.0))
    } else if rounded.is_sign_positive() {
        format!("+{}", format_currency(Some(amount)))
    } else {
        format_currency(Some(amount))
    }
}

fn group_thousands(amount: Decimal) -> String {
    let text = format!("{amount:.2}");
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped}.{fraction}")
}

// =============================================================================
// Mass update worksheet
// =============================================================================

/// One stock on the mass update worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct StockPricing {
    pub stock_number: String,
    pub product_name_th: Option<String>,
    pub product_name_en: Option<String>,
    pub product_type_name_th: Option<String>,
    pub product_type_name_en: Option<String>,
    pub gold_materials: Vec<Material>,
    /// Gems, labor and anything else; never repriced
    pub other_materials: Vec<Material>,
    /// Price of the first gold line, 0 when the stock has no gold
    pub original_gold_price: f64,
    pub new_gold_price: f64,
    /// Recorded `productCost`
    pub original_cost: f64,
    pub new_cost: f64,
}

impl StockPricing {
    pub fn from_detail(detail: StockDetail) -> Self {
        let (gold_materials, other_materials): (Vec<_>, Vec<_>) =
            detail.materials.into_iter().partition(Material::is_gold);
        let original_gold_price = gold_materials
            .first()
            .and_then(|m| m.price)
            .unwrap_or_default();
        let original_cost = detail.product_cost.unwrap_or_default();

        Self {
            stock_number: detail.stock_number,
            product_name_th: detail.product_name_th,
            product_name_en: detail.product_name_en,
            product_type_name_th: detail.product_type_name_th,
            product_type_name_en: detail.product_type_name_en,
            gold_materials,
            other_materials,
            original_gold_price,
            new_gold_price: original_gold_price,
            original_cost,
            new_cost: original_cost,
        }
    }

    /// Set the new gold price and recompute the cost
    pub fn set_gold_price(&mut self, price: f64) {
        self.new_gold_price = price;
        self.recalculate();
    }

    /// Gold lines at the new price plus the recorded cost of every other line
    pub fn recalculate(&mut self) {
        let gold: Decimal = self
            .gold_materials
            .iter()
            .map(|m| to_decimal(gold_cost(m, self.new_gold_price)))
            .sum();
        let other: Decimal = self
            .other_materials
            .iter()
            .map(|m| to_decimal(m.recorded_cost()))
            .sum();
        self.new_cost = to_f64(gold + other);
    }

    pub fn difference(&self) -> f64 {
        to_f64(to_decimal(self.new_cost) - to_decimal(self.original_cost))
    }

    pub fn is_changed(&self) -> bool {
        !money_eq(self.new_gold_price, self.original_gold_price)
            || !money_eq(self.new_cost, self.original_cost)
    }

    /// Gold lines carrying the new price and cost; other lines untouched
    pub fn repriced_materials(&self) -> Vec<Material> {
        self.gold_materials
            .iter()
            .map(|m| Material {
                price: Some(self.new_gold_price),
                cost: Some(gold_cost(m, self.new_gold_price)),
                ..m.clone()
            })
            .chain(self.other_materials.iter().cloned())
            .collect()
    }

    pub fn to_edit_item(&self) -> StockEditItem {
        StockEditItem {
            product_cost: Some(self.new_cost),
            materials: Some(self.repriced_materials()),
            ..StockEditItem::new(self.stock_number.clone())
        }
    }
}

/// Outcome of submitting a worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing differed; no request was sent
    NoChanges,
    Updated { count: usize, message: String },
}

/// Stocks loaded for a gold price change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoldPriceWorksheet {
    stocks: Vec<StockPricing>,
}

impl GoldPriceWorksheet {
    pub fn new(details: Vec<StockDetail>) -> Self {
        Self {
            stocks: details.into_iter().map(StockPricing::from_detail).collect(),
        }
    }

    pub fn stocks(&self) -> &[StockPricing] {
        &self.stocks
    }

    pub fn get(&self, index: usize) -> Option<&StockPricing> {
        self.stocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Price one stock; false when the index is out of range
    pub fn set_price(&mut self, index: usize, price: f64) -> bool {
        match self.stocks.get_mut(index) {
            Some(stock) => {
                stock.set_gold_price(price);
                true
            }
            None => false,
        }
    }

    /// Price every stock at once; `None` and non-positive prices are ignored
    pub fn apply_global_price(&mut self, price: Option<f64>) -> bool {
        let Some(price) = price.filter(|p| *p > 0.0) else {
            return false;
        };
        for stock in &mut self.stocks {
            stock.set_gold_price(price);
        }
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<StockPricing> {
        (index < self.stocks.len()).then(|| self.stocks.remove(index))
    }

    pub fn clear(&mut self) {
        self.stocks.clear();
    }

    pub fn total_original_cost(&self) -> f64 {
        to_f64(self.stocks.iter().map(|s| to_decimal(s.original_cost)).sum())
    }

    pub fn total_new_cost(&self) -> f64 {
        to_f64(self.stocks.iter().map(|s| to_decimal(s.new_cost)).sum())
    }

    pub fn total_difference(&self) -> f64 {
        to_f64(to_decimal(self.total_new_cost()) - to_decimal(self.total_original_cost()))
    }

    pub fn changed_count(&self) -> usize {
        self.stocks.iter().filter(|s| s.is_changed()).count()
    }

    pub fn has_changes(&self) -> bool {
        self.stocks.iter().any(StockPricing::is_changed)
    }

    /// Edit payload for the changed stocks only
    pub fn edit_payload(&self) -> Vec<StockEditItem> {
        self.stocks
            .iter()
            .filter(|s| s.is_changed())
            .map(StockPricing::to_edit_item)
            .collect()
    }

    /// Send the changed stocks; the worksheet is emptied on success
    pub async fn submit(&mut self, store: &StockStore) -> ClientResult<SubmitOutcome> {
        let payload = self.edit_payload();
        if payload.is_empty() {
            return Ok(SubmitOutcome::NoChanges);
        }
        let count = payload.len();
        let message = store.edit(payload).await?;
        tracing::info!(count, "Gold prices updated");
        self.clear();
        Ok(SubmitOutcome::Updated { count, message })
    }
}

/// Result of loading stocks onto a worksheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorksheetLoad {
    pub worksheet: GoldPriceWorksheet,
    /// Stock numbers the server did not return, with its message
    pub missing: Vec<(String, String)>,
}

/// Fetch each stock number in `input` and build a worksheet
///
/// Stocks the server refuses are collected in `missing`. Transport and
/// authorization failures abort the whole load.
pub async fn load_worksheet(store: &StockStore, input: &str) -> ClientResult<WorksheetLoad> {
    let stock_numbers = parse_stock_numbers(input);
    if stock_numbers.is_empty() {
        return Err(ClientError::Validation(
            "Enter at least one stock number".to_string(),
        ));
    }

    let mut details = Vec::with_capacity(stock_numbers.len());
    let mut missing = Vec::new();
    for stock_number in stock_numbers {
        match store.get(&stock_number).await {
            Ok(detail) => details.push(detail),
            Err(err @ ClientError::Rejected { .. }) => {
                tracing::warn!(stock_number = %stock_number, error = %err, "Stock not loaded");
                missing.push((stock_number, err.user_message()));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(WorksheetLoad {
        worksheet: GoldPriceWorksheet::new(details),
        missing,
    })
}
