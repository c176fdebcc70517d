// gem-client/tests/session_flow.rs
// Login, guard, store and worksheet flows over a scripted backend

mod common;

use common::{Harness, login_body, stock_body};
use gem_client::navigation::routes::route_by_name;
use gem_client::pricing::{SubmitOutcome, load_worksheet};
use gem_client::product_edit::ProductEditForm;
use gem_client::{ClientError, Decision, ErrorKind, ListQuery, LoginCredentials, SearchCriteria};
use serde_json::json;
use shared::client::ResetPasswordRequest;
use shared::models::{BranchInput, CustomerUpdate};

#[tokio::test]
async fn test_login_then_logout_leaves_no_auth_data() {
    for remember in [false, true] {
        let h = Harness::new();
        h.transport.respond("api/login", login_body(&["Dashboard"]));
        h.transport.respond("api/login/logout", json!({ "isSuccess": true }));

        let mut credentials = LoginCredentials::new("somchai", "secret");
        credentials.remember_me = remember;
        let session = h.context.auth().login(&credentials).await.unwrap();
        assert_eq!(session.token, "jwt-token-1");
        assert!(h.context.session().is_authenticated());
        assert!(!h.durable.is_empty());

        h.context.auth().logout().await;
        assert!(!h.context.session().is_authenticated());
        assert!(h.storage_is_empty(), "remember_me={remember}");
        assert_eq!(h.transport.requests_to("api/login/logout").len(), 1);
    }
}

#[tokio::test]
async fn test_logout_without_token_skips_backend() {
    let h = Harness::new();
    h.context.auth().logout().await;
    assert!(h.transport.requests().is_empty());
    assert!(h.storage_is_empty());
}

#[tokio::test]
async fn test_failed_login_wipes_everything() {
    let h = Harness::new();
    h.transport.respond(
        "api/login",
        json!({ "isSuccess": false, "message": "Invalid username or password" }),
    );

    let err = h
        .context
        .auth()
        .login(&LoginCredentials::new("somchai", "wrong").remember())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Logical);
    assert_eq!(err.user_message(), "Invalid username or password");
    assert!(h.storage_is_empty());
}

#[tokio::test]
async fn test_remembered_session_restores_in_new_context() {
    let h = Harness::new();
    h.transport.respond("api/login", login_body(&["StockList"]));
    h.context
        .auth()
        .login(&LoginCredentials::new("somchai", "secret").remember())
        .await
        .unwrap();

    // Same durable storage, fresh scoped storage: a restart
    let restarted = gem_client::AppContext::new(
        gem_client::ClientConfig::default(),
        h.transport.clone(),
        h.durable.clone(),
        std::sync::Arc::new(gem_client::session::MemoryStorage::new()),
    );
    assert!(restarted.auth().check_auth());
    assert!(restarted.session().permissions().allows("StockList"));
}

#[tokio::test]
async fn test_unauthorized_response_clears_session() {
    let h = Harness::new();
    h.transport.respond("api/login", login_body(&["StockList"]));
    h.context
        .auth()
        .login(&LoginCredentials::new("somchai", "secret"))
        .await
        .unwrap();

    h.transport.expire_token("api/stock/inventory/get");
    let err = h.context.stock().get("ST001").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Token expired");
    assert!(!h.context.session().is_authenticated());
    assert!(h.storage_is_empty());

    let stock_list = route_by_name("StockList").unwrap();
    assert_eq!(
        h.context.guard().decide(stock_list, "/inventory/stock-list"),
        Decision::RedirectToLogin {
            redirect: Some("/inventory/stock-list".to_string())
        }
    );
}

#[tokio::test]
async fn test_guard_redirects_unlisted_route_to_dashboard() {
    let h = Harness::new();
    h.transport.respond("api/login", login_body(&["Dashboard"]));
    h.context
        .auth()
        .login(&LoginCredentials::new("somchai", "secret"))
        .await
        .unwrap();

    let guard = h.context.guard();
    let stock_list = route_by_name("StockList").unwrap();
    let decision = guard.decide(stock_list, "/inventory/stock-list");
    assert_eq!(decision, Decision::RedirectToDashboard);
    assert_eq!(decision.location().as_deref(), Some("/dashboard"));

    let login = route_by_name("Login").unwrap();
    assert_eq!(guard.decide(login, "/login"), Decision::RedirectToDashboard);
}

#[tokio::test]
async fn test_success_flag_false_is_a_failure_everywhere() {
    let h = Harness::new();
    let branches = h.context.branches();
    h.transport.respond(
        "api/branch",
        json!({ "isSuccess": false, "message": "Branch code already exists" }),
    );

    let input = BranchInput {
        name_th: "สาขาสยาม".into(),
        name_en: Some("Siam".into()),
        address: None,
    };
    let err = branches.create(&input).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Logical);
    assert_eq!(
        branches.state().error().as_deref(),
        Some("Branch code already exists")
    );
    assert!(!branches.state().is_loading());

    h.transport.time_out("api/branch");
    let err = branches.create(&input).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(branches.state().error().is_some());
}

#[tokio::test]
async fn test_list_sends_offset_and_default_sort() {
    let h = Harness::new();
    h.transport.respond(
        "api/branch/list",
        json!({ "data": [{ "branchId": 1, "nameTh": "สาขาสยาม" }], "total": 31 }),
    );

    let page = h
        .context
        .branches()
        .list(&ListQuery::new(SearchCriteria::text("siam")).page(2, 10))
        .await
        .unwrap();
    assert_eq!(page.total_records, 31);
    assert_eq!(page.total_pages(), 4);

    let sent = h.transport.requests_to("api/branch/list");
    let body = sent[0].body.clone().unwrap();
    assert_eq!(body["skip"], json!(20));
    assert_eq!(body["take"], json!(10));
    assert_eq!(body["sortBy"], json!("CreateDate"));
    assert_eq!(body["isDescending"], json!(true));
    assert_eq!(body["criteria"], json!({ "searchText": "siam" }));
}

#[tokio::test]
async fn test_worker_sale_list_pages_by_number() {
    let h = Harness::new();
    h.transport.respond(
        "api/workersale/list",
        json!({
            "data": [
                { "id": 4, "code": "S004", "nameTh": "นก", "branch": 1, "isActive": true }
            ],
            "totalRecords": 31
        }),
    );

    let page = h
        .context
        .worker_sales()
        .list(&ListQuery::new(SearchCriteria::text("nok")).page(2, 10))
        .await
        .unwrap();
    assert_eq!(page.total_records, 31);
    assert_eq!(page.items[0].code, "S004");

    let body = h.transport.requests_to("api/workersale/list")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(
        body,
        json!({
            "pageIndex": 2,
            "pageSize": 10,
            "sortBy": "CreateDate",
            "isDescending": true,
            "criteria": { "searchText": "nok" }
        })
    );
}

#[tokio::test]
async fn test_customer_update_can_deactivate() {
    let h = Harness::new();
    h.transport.respond(
        "api/customer/12",
        json!({ "isSuccess": true, "message": "Customer updated successfully" }),
    );

    let update = CustomerUpdate {
        phone: Some("0812345678".into()),
        is_active: Some(false),
        ..CustomerUpdate::default()
    };
    let saved = h.context.customers().update(12, &update).await.unwrap();
    assert_eq!(saved.message, "Customer updated successfully");

    let sent = h.transport.requests_to("api/customer/12");
    assert_eq!(sent[0].method, http::Method::PUT);
    let body = sent[0].body.clone().unwrap();
    assert_eq!(
        body,
        json!({
            "address1": null,
            "address2": null,
            "phone": "0812345678",
            "email": null,
            "country": null,
            "postcode": null,
            "isActive": false,
            "discount": null
        })
    );
    assert!(body.get("customerNumber").is_none());
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let h = Harness::new();
    h.transport.respond("api/login", login_body(&["GuideList"]));
    h.transport.respond("api/workerguide/list", json!({ "data": [], "total": 0 }));
    h.context
        .auth()
        .login(&LoginCredentials::new("somchai", "secret"))
        .await
        .unwrap();

    h.context
        .worker_guides()
        .list(&ListQuery::default())
        .await
        .unwrap();
    let sent = h.transport.requests_to("api/workerguide/list");
    assert_eq!(sent[0].token.as_deref(), Some("jwt-token-1"));
    assert!(h.transport.requests_to("api/login")[0].token.is_none());
}

#[tokio::test]
async fn test_mass_update_scenario() {
    let h = Harness::new();
    let path = "api/stock/inventory/get";
    h.transport.respond(path, stock_body("ST001", 15_750.0, 5.0, Some(500.0)));
    h.transport.respond(path, stock_body("ST002", 31_500.0, 10.0, None));
    h.transport.respond(path, json!({ "success": false, "message": "Stock not found" }));
    h.transport.respond("api/stock/inventory/edit", json!({ "success": true }));

    let stock = h.context.stock();
    let load = load_worksheet(&stock, "ST001, ST002\nST001 ST999").await.unwrap();
    assert_eq!(load.worksheet.len(), 2);
    assert_eq!(
        load.missing,
        vec![("ST999".to_string(), "Stock not found".to_string())]
    );

    let mut worksheet = load.worksheet;
    assert!(!worksheet.has_changes());
    worksheet.set_price(0, 3500.0);
    assert_eq!(worksheet.get(0).unwrap().new_cost, 18_875.0);
    assert_eq!(worksheet.changed_count(), 1);

    let outcome = worksheet.submit(&stock).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Updated { count: 1, .. }));
    assert!(worksheet.is_empty());

    let edit = h.transport.requests_to("api/stock/inventory/edit");
    let body = edit[0].body.clone().unwrap();
    let stocks = body["stocks"].as_array().unwrap();
    assert_eq!(stocks.len(), 1);
    assert_eq!(stocks[0]["stockNumber"], json!("ST001"));
    let materials = stocks[0]["materials"].as_array().unwrap();
    assert_eq!(materials[0]["type"], json!("gold"));
    assert_eq!(materials[0]["price"], json!(3500.0));
    assert_eq!(materials[1]["type"], json!("labor"));
    assert_eq!(materials[1]["cost"], json!(500.0));
}

#[tokio::test]
async fn test_mass_update_rejects_empty_input_and_unchanged_submit() {
    let h = Harness::new();
    let stock = h.context.stock();

    let err = load_worksheet(&stock, " ,\n ").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(h.transport.requests().is_empty());

    h.transport
        .respond("api/stock/inventory/get", stock_body("ST001", 15_750.0, 5.0, Some(500.0)));
    let mut worksheet = load_worksheet(&stock, "ST001").await.unwrap().worksheet;
    assert_eq!(worksheet.submit(&stock).await.unwrap(), SubmitOutcome::NoChanges);
    assert!(h.transport.requests_to("api/stock/inventory/edit").is_empty());
}

#[tokio::test]
async fn test_product_edit_submits_changed_fields() {
    let h = Harness::new();
    h.transport
        .respond("api/stock/inventory/get", stock_body("ST001", 15_750.0, 5.0, None));
    h.transport.respond(
        "api/stock/inventory/edit",
        json!({ "success": true, "message": "Updated 1 stock" }),
    );

    let stock = h.context.stock();
    let mut form = ProductEditForm::load(&stock, " ST001 ").await.unwrap();
    form.fields.product_name_th = Some("แหวนทองใหม่".into());
    form.fields.size = Some("15".into());

    let outcome = form.submit(&stock).await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Updated {
            count: 1,
            message: "Updated 1 stock".into()
        }
    );
    let body = h.transport.requests_to("api/stock/inventory/edit")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(body["stocks"][0]["stockNumber"], json!("ST001"));
    assert_eq!(body["stocks"][0]["productNameTh"], json!("แหวนทองใหม่"));
    assert_eq!(body["stocks"][0]["size"], json!("15"));
    assert!(body["stocks"][0].get("location").is_none());
    assert!(body["stocks"][0].get("materials").is_none());
}

#[tokio::test]
async fn test_reset_password_mismatch_is_local() {
    let h = Harness::new();
    let accounts = h.context.accounts();
    let request = ResetPasswordRequest {
        id: 7,
        username: None,
        old_password: "old".into(),
        new_password: "new-secret".into(),
        confirm_password: "new-secrte".into(),
    };

    let err = accounts.reset_password(&request).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Logical);
    assert!(h.transport.requests().is_empty());
    assert!(accounts.state().error().is_some());
}

#[tokio::test]
async fn test_reset_password_keeps_server_errors() {
    let h = Harness::new();
    h.transport.respond_status(
        "api/user/reset-password",
        400,
        json!({ "errors": { "NewPassword": ["Password must be at least 8 characters"] } }),
    );

    let request = ResetPasswordRequest {
        id: 0,
        username: Some("somchai".into()),
        old_password: "old".into(),
        new_password: "short".into(),
        confirm_password: "short".into(),
    };
    let err = h.context.accounts().reset_password(&request).await.unwrap_err();
    assert_eq!(err.user_message(), "Password must be at least 8 characters");
    assert!(err.errors().is_some());
}

#[tokio::test]
async fn test_role_update_round_trip() {
    let h = Harness::new();
    h.transport.respond(
        "api/role/3",
        json!({
            "success": true,
            "data": { "roleId": 3, "roleName": "Stock", "routerAllow": ["StockList"] }
        }),
    );
    h.transport.respond("api/role/3", json!({ "success": true }));

    let roles = h.context.roles();
    let role = roles.get(3).await.unwrap();
    assert_eq!(role.router_allow, vec!["StockList".to_string()]);

    let update = shared::models::RoleUpdate {
        router_allow: Some(vec!["StockList".into(), "MassUpdateGoldPrice".into()]),
        ..Default::default()
    };
    let message = roles.update(3, &update).await.unwrap();
    assert_eq!(message, "Role updated successfully");

    let sent = h.transport.requests_to("api/role/3");
    assert_eq!(sent[1].method, http::Method::PUT);
    assert_eq!(
        sent[1].body,
        Some(json!({ "roleId": 3, "routerAllow": ["StockList", "MassUpdateGoldPrice"] }))
    );
}
