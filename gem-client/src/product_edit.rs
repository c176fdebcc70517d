//! Single product edit
//!
//! Loads one stock, lets the caller change its descriptive fields and its
//! material lines, and sends back only what changed.

use std::collections::BTreeMap;

use shared::models::{Material, MaterialKind, StockDetail, StockEditItem};

use crate::error::{ClientError, ClientResult};
use crate::pricing::{SubmitOutcome, material_cost, to_decimal, to_f64};
use crate::stores::StockStore;

/// Editable descriptive fields of a stock
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub product_name_th: Option<String>,
    pub product_name_en: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub product_number: Option<String>,
    pub po_number: Option<String>,
    pub qty_unit: Option<String>,
    pub product_cost_unit: Option<String>,
    pub remark: Option<String>,
    pub branch_id: Option<i64>,
}

impl ProductFields {
    fn from_detail(detail: &StockDetail) -> Self {
        Self {
            product_name_th: detail.product_name_th.clone(),
            product_name_en: detail.product_name_en.clone(),
            location: detail.location.clone(),
            size: detail.size.clone(),
            product_number: detail.product_number.clone(),
            po_number: detail.po_number.clone(),
            qty_unit: detail.qty_unit.clone(),
            product_cost_unit: detail.product_cost_unit.clone(),
            remark: detail.remark.clone(),
            branch_id: detail.branch_id,
        }
    }

    /// (wire name, label, value) of every text field
    fn text_fields(&self) -> [(&'static str, &'static str, Option<&str>); 9] {
        [
            ("productNameTh", "Product name (TH)", self.product_name_th.as_deref()),
            ("productNameEn", "Product name (EN)", self.product_name_en.as_deref()),
            ("location", "Location", self.location.as_deref()),
            ("size", "Size", self.size.as_deref()),
            ("productNumber", "Product number", self.product_number.as_deref()),
            ("poNumber", "PO number", self.po_number.as_deref()),
            ("qtyUnit", "Quantity unit", self.qty_unit.as_deref()),
            ("productCostUnit", "Cost unit", self.product_cost_unit.as_deref()),
            ("remark", "Remark", self.remark.as_deref()),
        ]
    }
}

/// One changed field, for the preview dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Wire name, e.g. `productNameTh`
    pub field: &'static str,
    pub label: &'static str,
    pub old: Option<String>,
    pub new: Option<String>,
}

/// Edit state of one loaded stock
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEditForm {
    stock_number: String,
    original: ProductFields,
    original_materials: Vec<Material>,
    pub fields: ProductFields,
    pub materials: Vec<Material>,
}

/// `null` and `""` are the same value
fn blank_eq(a: Option<&str>, b: Option<&str>) -> bool {
    a.unwrap_or_default() == b.unwrap_or_default()
}

impl ProductEditForm {
    pub fn from_detail(detail: &StockDetail) -> Self {
        let fields = ProductFields::from_detail(detail);
        Self {
            stock_number: detail.stock_number.clone(),
            original: fields.clone(),
            original_materials: detail.materials.clone(),
            fields,
            materials: detail.materials.clone(),
        }
    }

    /// `POST api/stock/inventory/get`, then build the form
    pub async fn load(store: &StockStore, stock_number: &str) -> ClientResult<Self> {
        let stock_number = stock_number.trim();
        if stock_number.is_empty() {
            return Err(ClientError::Validation("Enter a stock number".to_string()));
        }
        let detail = store.get(stock_number).await?;
        Ok(Self::from_detail(&detail))
    }

    pub fn stock_number(&self) -> &str {
        &self.stock_number
    }

    pub fn original(&self) -> &ProductFields {
        &self.original
    }

    pub fn changed_fields(&self) -> Vec<FieldChange> {
        let mut changes: Vec<FieldChange> = self
            .original
            .text_fields()
            .into_iter()
            .zip(self.fields.text_fields())
            .filter(|((_, _, old), (_, _, new))| !blank_eq(*old, *new))
            .map(|((field, label, old), (_, _, new))| FieldChange {
                field,
                label,
                old: old.map(str::to_string),
                new: new.map(str::to_string),
            })
            .collect();

        if self.original.branch_id != self.fields.branch_id {
            changes.push(FieldChange {
                field: "branchId",
                label: "Branch",
                old: self.original.branch_id.map(|id| id.to_string()),
                new: self.fields.branch_id.map(|id| id.to_string()),
            });
        }
        changes
    }

    pub fn materials_changed(&self) -> bool {
        self.materials != self.original_materials
    }

    pub fn has_changes(&self) -> bool {
        self.materials_changed() || !self.changed_fields().is_empty()
    }

    /// Sum of the recorded material costs
    pub fn material_total(&self) -> f64 {
        to_f64(
            self.materials
                .iter()
                .map(|m| to_decimal(m.recorded_cost()))
                .sum(),
        )
    }

    /// Edit payload: the stock number plus whatever changed
    pub fn to_edit_item(&self) -> StockEditItem {
        let mut item = StockEditItem::new(self.stock_number.clone());
        for change in self.changed_fields() {
            let value = change.new.clone();
            match change.field {
                "productNameTh" => item.product_name_th = value,
                "productNameEn" => item.product_name_en = value,
                "location" => item.location = value,
                "size" => item.size = value,
                "productNumber" => item.product_number = value,
                "poNumber" => item.po_number = value,
                "qtyUnit" => item.qty_unit = value,
                "productCostUnit" => item.product_cost_unit = value,
                "remark" => item.remark = value,
                "branchId" => item.branch_id = self.fields.branch_id,
                _ => {}
            }
        }
        if self.materials_changed() {
            item.materials = Some(self.materials.clone());
            item.product_cost = Some(self.material_total());
        }
        item
    }

    /// Validate, price and store a material line
    ///
    /// `index` of `None` appends, otherwise the line at `index` is replaced.
    pub fn save_material(
        &mut self,
        index: Option<usize>,
        mut material: Material,
    ) -> Result<usize, MaterialErrors> {
        validate_material(&material)?;
        calculate_material_cost(&mut material);
        match index {
            Some(i) if i < self.materials.len() => {
                self.materials[i] = material;
                Ok(i)
            }
            Some(i) => Err(MaterialErrors::single("index", format!("No material at {i}"))),
            None => {
                self.materials.push(material);
                Ok(self.materials.len() - 1)
            }
        }
    }

    pub fn remove_material(&mut self, index: usize) -> Option<Material> {
        (index < self.materials.len()).then(|| self.materials.remove(index))
    }

    /// Send the changes; `NoChanges` when there is nothing to send
    pub async fn submit(&self, store: &StockStore) -> ClientResult<SubmitOutcome> {
        if !self.has_changes() {
            return Ok(SubmitOutcome::NoChanges);
        }
        let message = store.edit(vec![self.to_edit_item()]).await?;
        tracing::info!(stock_number = %self.stock_number, "Product updated");
        Ok(SubmitOutcome::Updated { count: 1, message })
    }
}

/// Blank material line for the add dialog
pub fn empty_material(kind: MaterialKind) -> Material {
    let mut material = Material::new(kind);
    material.item_name_th = Some(String::new());
    match material.kind {
        MaterialKind::Gold | MaterialKind::Gem => {
            material.weight_unit = Some("g".to_string());
        }
        MaterialKind::Labor | MaterialKind::Other(_) => {
            material.description = Some(String::new());
        }
    }
    material
}

/// Gold pays for waste, gems do not; other lines keep the cost entered
pub fn calculate_material_cost(material: &mut Material) {
    let weight = material.weight.unwrap_or_default();
    let price = material.price.unwrap_or_default();
    match material.kind {
        MaterialKind::Gold => {
            material.cost = Some(material_cost(
                weight,
                material.waste_percent.unwrap_or_default(),
                price,
            ));
        }
        MaterialKind::Gem => material.cost = Some(material_cost(weight, 0.0, price)),
        MaterialKind::Labor | MaterialKind::Other(_) => {}
    }
}

/// Per-field validation messages of a material line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialErrors {
    errors: BTreeMap<&'static str, String>,
}

impl MaterialErrors {
    fn single(field: &'static str, message: String) -> Self {
        let mut errors = Self::default();
        errors.errors.insert(field, message);
        errors
    }

    fn add(&mut self, field: &'static str, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl std::fmt::Display for MaterialErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<MaterialErrors> for ClientError {
    fn from(errors: MaterialErrors) -> Self {
        ClientError::Validation(errors.to_string())
    }
}

pub fn validate_material(material: &Material) -> Result<(), MaterialErrors> {
    let mut errors = MaterialErrors::default();
    let name_missing = material
        .item_name_th
        .as_deref()
        .is_none_or(|n| n.trim().is_empty());

    match material.kind {
        MaterialKind::Gold | MaterialKind::Gem => {
            if name_missing {
                errors.add("itemNameTh", "Item name is required");
            }
            if material.weight.is_none_or(|w| w <= 0.0) {
                errors.add("weight", "Weight must be greater than 0");
            }
            if material.price.is_some_and(|p| p < 0.0) {
                errors.add("price", "Price cannot be negative");
            }
            if material.waste_percent.is_some_and(|w| w < 0.0) {
                errors.add("wastePercent", "Waste cannot be negative");
            }
        }
        MaterialKind::Labor | MaterialKind::Other(_) => {
            if name_missing {
                errors.add("itemNameTh", "Item name is required");
            }
            if material.cost.is_none_or(|c| c < 0.0) {
                errors.add("cost", "Cost is required");
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// "-" for missing or blank values
pub fn format_field_value(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
