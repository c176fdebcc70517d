//! Master data and staff stores
//!
//! All of these share the plain `api/<segment>` CRUD shape and a free-text
//! search; they differ in record types, default sort and paging.

use shared::SearchCriteria;
use shared::SortSpec;
use shared::models::{
    Branch, BranchInput, Customer, CustomerInput, CustomerUpdate, Gem, GemCreate, GemShape,
    GemShapeCreate, GemShapeUpdate, GemUpdate, Gold, GoldCreate, GoldSize, GoldSizeCreate,
    GoldSizeUpdate, GoldUpdate, ProductType, ProductTypeCreate, ProductTypeUpdate, WorkerDriver,
    WorkerDriverInput, WorkerGuide, WorkerGuideInput, WorkerSale, WorkerSaleInput,
};

use super::{CrudStore, Paging, Resource};

macro_rules! resource {
    (
        $(#[$meta:meta])*
        $name:ident, $segment:literal, $label:literal,
        $record:ty, $create:ty, $update:ty
        $(, sort = $sort:expr)?
        $(, paging = $paging:expr)?
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name {}

        impl Resource for $name {
            const SEGMENT: &'static str = $segment;
            const LABEL: &'static str = $label;
            $(const PAGING: Paging = $paging;)?

            type Record = $record;
            type Create = $create;
            type Update = $update;
            type Criteria = SearchCriteria;

            $(
                fn default_sort() -> SortSpec {
                    $sort
                }
            )?
        }
    };
}

resource!(
    /// Shop branches, newest first
    Branches, "branch", "branch",
    Branch, BranchInput, BranchInput,
    sort = SortSpec::newest_first()
);
resource!(Gems, "gem", "gem", Gem, GemCreate, GemUpdate);
resource!(
    GemShapes, "gemshape", "gem shape",
    GemShape, GemShapeCreate, GemShapeUpdate
);
resource!(
    /// Gold types (karat grades)
    Golds, "gold", "gold",
    Gold, GoldCreate, GoldUpdate
);
resource!(
    GoldSizes, "goldsize", "gold size",
    GoldSize, GoldSizeCreate, GoldSizeUpdate
);
resource!(
    ProductTypes, "producttype", "product type",
    ProductType, ProductTypeCreate, ProductTypeUpdate
);
resource!(
    Customers, "customer", "customer",
    Customer, CustomerInput, CustomerUpdate
);
resource!(
    /// Tour guides bringing customers in
    WorkerGuides, "workerguide", "worker guide",
    WorkerGuide, WorkerGuideInput, WorkerGuideInput,
    sort = SortSpec::newest_first()
);
resource!(
    WorkerSales, "workersale", "worker sale",
    WorkerSale, WorkerSaleInput, WorkerSaleInput,
    sort = SortSpec::newest_first(),
    paging = Paging::PageNumber
);
resource!(
    WorkerDrivers, "workerdriver", "worker driver",
    WorkerDriver, WorkerDriverInput, WorkerDriverInput
);

pub type BranchStore = CrudStore<Branches>;
pub type GemStore = CrudStore<Gems>;
pub type GemShapeStore = CrudStore<GemShapes>;
pub type GoldStore = CrudStore<Golds>;
pub type GoldSizeStore = CrudStore<GoldSizes>;
pub type ProductTypeStore = CrudStore<ProductTypes>;
pub type CustomerStore = CrudStore<Customers>;
pub type WorkerGuideStore = CrudStore<WorkerGuides>;
pub type WorkerSaleStore = CrudStore<WorkerSales>;
pub type WorkerDriverStore = CrudStore<WorkerDrivers>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::ListQuery;
    use serde_json::json;

    #[test]
    fn test_default_sorts() {
        let query = ListQuery::new(SearchCriteria::default());

        let branch = serde_json::to_value(query.to_request(Branches::default_sort())).unwrap();
        assert_eq!(branch["sortBy"], json!("CreateDate"));
        assert_eq!(branch["isDescending"], json!(true));

        let gem = serde_json::to_value(query.to_request(Gems::default_sort())).unwrap();
        assert_eq!(gem["sort"], json!([]));
        assert!(gem.get("sortBy").is_none());
    }
}
