//! Resource operations over a scripted transport.

mod support;

use chrono::{TimeZone, Utc};
use recurly_core::{Client, HttpMethod, QueryParams};
use recurly_domain::{
    Account, Adjustment, BillingInfo, ClientConfig, CurrencyAmounts, Invoice, Plan, PlanAddOn,
    RecurlyError, Reference, RefundType, Resource, Subscription, SubscriptionAddOn, Timeframe, Transaction,
};
use support::{account_xml, client, document, ScriptedTransport, API_KEY, BASE_URL};

fn body_of(transport: &ScriptedTransport) -> String {
    transport.last_request().body_text().unwrap_or_default()
}

/* -------------------------------------------------------------------------- */
/* Request shape                                                              */
/* -------------------------------------------------------------------------- */

#[test]
fn get_sends_standard_headers_without_content_type() {
    let transport = ScriptedTransport::new().respond(200, &document(&account_xml("1")));
    let client = client(transport.clone());

    let account = client.get_account("1").unwrap();
    assert_eq!(account.email, "1@example.com");

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url.as_str(), format!("{BASE_URL}accounts/1"));
    assert_eq!(request.header("accept"), Some("application/xml"));
    assert_eq!(request.header("Accept-Language"), Some("en-US"));
    assert!(request.header("User-Agent").unwrap().starts_with("Recurly-Rust/"));
    assert!(request.header("Authorization").unwrap().starts_with("Basic "));
    assert!(request.header("Content-Type").is_none());
    assert!(request.body.is_none());
    assert!(!format!("{:?}", client.config()).contains(API_KEY));
}

#[test]
fn base_url_without_trailing_slash_is_normalized() {
    let transport = ScriptedTransport::new().respond(200, &document(&account_xml("1")));
    let config = ClientConfig::new(API_KEY).with_base_url("https://api.recurly.test/v2");
    let client = Client::new(config, transport.clone()).unwrap();

    client.get_account("1").unwrap();
    assert_eq!(transport.last_request().url.as_str(), "https://api.recurly.test/v2/accounts/1");
}

#[test]
fn empty_api_key_is_a_config_error() {
    let err = Client::new(ClientConfig::new("  "), ScriptedTransport::new()).unwrap_err();
    assert!(matches!(err, RecurlyError::Config(_)));
}

/* -------------------------------------------------------------------------- */
/* Failure classification                                                     */
/* -------------------------------------------------------------------------- */

#[test]
fn not_found_is_an_api_error() {
    let transport = ScriptedTransport::new().respond(
        404,
        "<error><symbol>not_found</symbol><description>Couldn't find Account with account_code = nobody</description></error>",
    );
    let client = client(transport);

    let err = client.get_account("nobody").unwrap_err();
    assert!(err.is_not_found());
    match err {
        RecurlyError::Api(api) => {
            assert_eq!(api.symbol, "not_found");
            assert_eq!(
                api.to_string(),
                "not_found, Couldn't find Account with account_code = nobody  Status Code: 404"
            );
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unprocessable_create_is_a_validation_error() {
    let transport = ScriptedTransport::new().respond(
        422,
        r#"<errors>
             <error field="account.account_code" symbol="taken">has already been taken</error>
             <error field="account.email" symbol="invalid_email">is not a valid email address</error>
           </errors>"#,
    );
    let client = client(transport);

    let mut account = Account::new("1");
    match client.create_account(&mut account).unwrap_err() {
        RecurlyError::Validation(errs) => {
            assert_eq!(errs.status, 422);
            assert_eq!(errs.fields(), vec!["account.account_code", "account.email"]);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(!account.is_persisted());
}

#[test]
fn get_treats_any_non_200_as_failure() {
    let transport = ScriptedTransport::new().respond(201, &document(&account_xml("1")));
    let client = client(transport);

    let err = client.get_account("1").unwrap_err();
    assert_eq!(err.status(), Some(201));
}

#[test]
fn transport_failures_propagate() {
    let transport = ScriptedTransport::new().fail("connection reset by peer");
    let client = client(transport);

    let err = client.get_plan("gold").unwrap_err();
    assert!(matches!(err, RecurlyError::Transport(_)));
    assert_eq!(err.status(), None);
}

/* -------------------------------------------------------------------------- */
/* Create / update / delete                                                   */
/* -------------------------------------------------------------------------- */

#[test]
fn creating_a_persisted_record_sends_nothing() {
    let transport = ScriptedTransport::new();
    let client = client(transport.clone());

    let mut account = Account {
        created_at: Some(Utc.with_ymd_and_hms(2011, 10, 25, 12, 0, 0).unwrap()),
        ..Account::new("1")
    };
    let err = client.create_account(&mut account).unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.status(), Some(400));

    let mut adjustment = Adjustment { uuid: "a1".into(), ..Adjustment::charge("1", "fee", 100, "USD") };
    assert!(client.create_adjustment(&mut adjustment).unwrap_err().is_already_exists());

    let mut subscription = Subscription { uuid: "s1".into(), ..Subscription::new("gold", "USD") };
    assert!(client.create_subscription(&mut subscription).unwrap_err().is_already_exists());

    assert_eq!(transport.call_count(), 0);
}

#[test]
fn missing_identifiers_are_rejected_locally() {
    let transport = ScriptedTransport::new();
    let client = client(transport.clone());

    assert!(matches!(client.get_account(""), Err(RecurlyError::InvalidInput(_))));
    assert!(matches!(
        client.update_billing_info(&mut BillingInfo::default()),
        Err(RecurlyError::InvalidInput(_))
    ));
    assert!(matches!(
        client.create_subscription(&mut Subscription::new("gold", "USD")),
        Err(RecurlyError::InvalidInput(_))
    ));
    assert!(matches!(
        client.mark_invoice_successful(&mut Invoice::default()),
        Err(RecurlyError::InvalidInput(_))
    ));
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn create_replaces_record_with_server_copy() {
    let transport = ScriptedTransport::new().respond(201, &document(&account_xml("1")));
    let client = client(transport.clone());

    let mut account = Account { first_name: "Verena".into(), ..Account::new("1") };
    account.billing_info = Some(BillingInfo { number: "4111-1111-1111-1111".into(), ..BillingInfo::default() });
    client.create_account(&mut account).unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url.as_str(), format!("{BASE_URL}accounts"));
    assert_eq!(request.header("Content-Type"), Some("application/xml; charset=utf-8"));
    let sent = body_of(&transport);
    assert!(sent.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(sent.contains("<first_name>Verena</first_name>"));
    assert!(sent.contains("<number>4111-1111-1111-1111</number>"));

    assert_eq!(account.state, "active");
    assert!(account.created_at.is_some());
    assert!(account.billing_info.is_none());
}

#[test]
fn update_of_closed_account_omits_state() {
    let transport = ScriptedTransport::new().respond(200, &document(&account_xml("1")));
    let client = client(transport.clone());

    let mut account = Account {
        state: "closed".into(),
        hosted_login_token: "token".into(),
        email: "new@example.com".into(),
        created_at: Some(Utc.with_ymd_and_hms(2011, 10, 25, 12, 0, 0).unwrap()),
        ..Account::new("1")
    };
    client.update_account(&mut account).unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.url.as_str(), format!("{BASE_URL}accounts/1"));
    let sent = body_of(&transport);
    assert!(!sent.contains("closed"));
    assert!(!sent.contains("hosted_login_token"));
    assert!(!sent.contains("created_at"));
    assert!(sent.contains("<email>new@example.com</email>"));
    // re-synced from the response
    assert_eq!(account.state, "active");
}

#[test]
fn update_with_empty_body_keeps_local_record() {
    let transport = ScriptedTransport::new().respond(200, "");
    let client = client(transport);

    let mut plan = Plan::monthly("gold", "Gold plan", CurrencyAmounts::new().with("USD", 1000));
    client.update_plan(&mut plan).unwrap();
    assert_eq!(plan.name, "Gold plan");
}

#[test]
fn delete_accepts_any_success_status() {
    let transport = ScriptedTransport::new().respond(204, "").respond(200, "");
    let client = client(transport.clone());

    client.close_account("1").unwrap();
    assert_eq!(transport.last_request().method, HttpMethod::Delete);
    client.delete_plan("gold").unwrap();
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}plans/gold"));
}

#[test]
fn reopen_puts_to_action_path() {
    let transport = ScriptedTransport::new().respond(200, &document(&account_xml("1")));
    let client = client(transport.clone());

    let mut account = Account { state: "closed".into(), ..Account::new("1") };
    client.reopen_account(&mut account).unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.url.as_str(), format!("{BASE_URL}accounts/1/reopen"));
    assert!(request.body.is_none());
    assert_eq!(account.state, "active");
}

/* -------------------------------------------------------------------------- */
/* Nested resources                                                           */
/* -------------------------------------------------------------------------- */

#[test]
fn billing_info_update_strips_card_echoes() {
    let response = document(
        r#"<billing_info href="https://api.recurly.test/v2/accounts/1/billing_info">
             <account href="https://api.recurly.test/v2/accounts/1"/>
             <first_name>Verena</first_name>
             <first_six>411111</first_six>
             <last_four>1111</last_four>
             <card_type>Visa</card_type>
             <month type="integer">11</month>
             <year type="integer">2030</year>
           </billing_info>"#,
    );
    let transport = ScriptedTransport::new().respond(200, &response);
    let client = client(transport.clone());

    let mut billing = BillingInfo {
        account: Some(Reference::new("https://api.recurly.test/v2/accounts/1")),
        first_name: "Verena".into(),
        number: "4111-1111-1111-1111".into(),
        last_four: "0000".into(),
        card_type: "Visa".into(),
        month: 11,
        year: 2030,
        ..BillingInfo::default()
    };
    client.update_billing_info(&mut billing).unwrap();

    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}accounts/1/billing_info"));
    let sent = body_of(&transport);
    assert!(!sent.contains("last_four"));
    assert!(!sent.contains("card_type"));
    assert!(!sent.contains("href"));
    assert_eq!(billing.last_four, "1111");
    assert_eq!(billing.account_code, "1");
}

#[test]
fn adjustment_is_posted_under_its_account() {
    let response = document(
        r#"<adjustment type="charge"><uuid>a1</uuid><description>Setup</description><unit_amount_in_cents>5000</unit_amount_in_cents><currency>USD</currency></adjustment>"#,
    );
    let transport = ScriptedTransport::new().respond(201, &response);
    let client = client(transport.clone());

    let mut adjustment = Adjustment::charge("acct-1", "Setup", 5000, "USD");
    client.create_adjustment(&mut adjustment).unwrap();

    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}accounts/acct-1/adjustments"));
    assert!(body_of(&transport).contains("<unit_amount_in_cents>5000</unit_amount_in_cents>"));
    assert_eq!(adjustment.uuid, "a1");
    assert_eq!(adjustment.account_code, "acct-1");
}

#[test]
fn plan_add_on_crud_uses_plan_path() {
    let add_on_xml = document(
        r#"<add_on><plan href="https://api.recurly.test/v2/plans/gold"/><add_on_code>ip</add_on_code><name>IPs</name><created_at>2011-06-28T12:34:56Z</created_at></add_on>"#,
    );
    let transport = ScriptedTransport::new()
        .respond(201, &add_on_xml)
        .respond(200, &add_on_xml)
        .respond(204, "");
    let client = client(transport.clone());

    let mut add_on = PlanAddOn::new("ip", "IPs", CurrencyAmounts::new().with("USD", 200));
    add_on.plan_code = "gold".into();
    client.create_plan_add_on(&mut add_on).unwrap();
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}plans/gold/add_ons"));
    assert!(add_on.created_at.is_some());

    add_on.name = "IP addresses".into();
    client.update_plan_add_on(&mut add_on).unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.url.as_str(), format!("{BASE_URL}plans/gold/add_ons/ip"));
    assert!(!body_of(&transport).contains("created_at"));

    client.delete_plan_add_on("gold", "ip").unwrap();
    assert_eq!(transport.last_request().method, HttpMethod::Delete);
}

#[test]
fn coupon_redemption_round_trip() {
    let redemption_xml = document(
        r#"<redemption><coupon href="https://api.recurly.test/v2/coupons/spring"/><account href="https://api.recurly.test/v2/accounts/1"/><currency>USD</currency><state>active</state></redemption>"#,
    );
    let transport = ScriptedTransport::new().respond(201, &redemption_xml).respond(204, "");
    let client = client(transport.clone());

    let redemption = client.redeem_coupon("spring", "1", "USD").unwrap();
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}coupons/spring/redeem"));
    assert!(body_of(&transport).contains("<redemption><account_code>1</account_code><currency>USD</currency></redemption>"));
    assert_eq!(redemption.coupon_code(), Some("spring"));
    assert_eq!(redemption.account_code, "1");

    client.delete_redemption("1").unwrap();
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}accounts/1/redemption"));
}

#[test]
fn pending_charges_are_invoiced_and_marked() {
    let invoice_xml = document(
        r#"<invoice><account href="https://api.recurly.test/v2/accounts/1"/><uuid>inv1</uuid><state>open</state><invoice_number>1005</invoice_number><total_in_cents>1200</total_in_cents></invoice>"#,
    );
    let paid_xml = invoice_xml.replace("<state>open</state>", "<state>collected</state>");
    let transport = ScriptedTransport::new().respond(201, &invoice_xml).respond(200, &paid_xml);
    let client = client(transport.clone());

    let mut invoice = client.invoice_pending_charges("1").unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url.as_str(), format!("{BASE_URL}accounts/1/invoices"));
    assert!(request.body.is_none());
    assert_eq!(invoice.invoice_number, "1005");

    client.mark_invoice_successful(&mut invoice).unwrap();
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}invoices/1005/mark_successful"));
    assert_eq!(invoice.state, "collected");
}

/* -------------------------------------------------------------------------- */
/* Subscriptions and transactions                                             */
/* -------------------------------------------------------------------------- */

fn subscription_xml(state: &str) -> String {
    document(&format!(
        r#"<subscription>
             <account href="https://api.recurly.test/v2/accounts/1"/>
             <plan href="https://api.recurly.test/v2/plans/gold"><plan_code>gold</plan_code></plan>
             <uuid>sub1</uuid>
             <state>{state}</state>
             <quantity>1</quantity>
             <currency>USD</currency>
           </subscription>"#
    ))
}

#[test]
fn subscription_create_embeds_account() {
    let transport = ScriptedTransport::new().respond(201, &subscription_xml("active"));
    let client = client(transport.clone());

    let mut subscription = Subscription::new("gold", "USD");
    subscription.subscription_add_ons.upsert(SubscriptionAddOn {
        add_on_code: "ip".into(),
        quantity: 2,
        ..SubscriptionAddOn::default()
    });
    subscription.attach_account(&Account { email: "v@example.com".into(), ..Account::new("1") }).unwrap();
    client.create_subscription(&mut subscription).unwrap();

    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}subscriptions"));
    let sent = body_of(&transport);
    assert!(sent.contains("<plan_code>gold</plan_code>"));
    assert!(sent.contains("<account><account_code>1</account_code><email>v@example.com</email></account>"));
    assert!(sent.contains("<subscription_add_ons><subscription_add_on><add_on_code>ip</add_on_code><quantity>2</quantity></subscription_add_on></subscription_add_ons>"));
    assert_eq!(subscription.uuid, "sub1");
    assert_eq!(subscription.plan_code(), Some("gold"));
}

#[test]
fn subscription_actions_hit_action_paths() {
    let transport = ScriptedTransport::new()
        .respond(200, &subscription_xml("active"))
        .respond(200, &subscription_xml("canceled"))
        .respond(200, &subscription_xml("active"))
        .respond(200, &subscription_xml("active"))
        .respond(200, &subscription_xml("expired"));
    let client = client(transport.clone());
    let mut subscription = Subscription { uuid: "sub1".into(), quantity: 3, ..Subscription::default() };

    client.update_subscription(&mut subscription, Timeframe::Renewal).unwrap();
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}subscriptions/sub1"));
    assert!(body_of(&transport).contains("<timeframe>renewal</timeframe><quantity>3</quantity>"));

    client.cancel_subscription(&mut subscription).unwrap();
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}subscriptions/sub1/cancel"));
    assert_eq!(subscription.state, "canceled");

    client.reactivate_subscription(&mut subscription).unwrap();
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}subscriptions/sub1/reactivate"));

    let renewal = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    client.postpone_subscription(&mut subscription, renewal).unwrap();
    let request = transport.last_request();
    assert_eq!(request.url.path(), "/v2/subscriptions/sub1/postpone");
    let query: QueryParams = request.url.query_pairs().into_owned().collect();
    assert_eq!(query.get("next_renewal_date"), Some("2030-01-01T00:00:00Z"));

    client.terminate_subscription(&mut subscription, RefundType::Partial).unwrap();
    assert_eq!(
        transport.last_request().url.as_str(),
        format!("{BASE_URL}subscriptions/sub1/terminate?refund=partial")
    );
    assert_eq!(subscription.state, "expired");
    assert!(transport.requests().iter().all(|r| r.method == HttpMethod::Put));
}

#[test]
fn delete_subscription_targets_the_record() {
    let transport = ScriptedTransport::new().respond(204, "");
    let client = client(transport.clone());

    client.delete_subscription("abc").unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.url.as_str(), format!("{BASE_URL}subscriptions/abc"));

    let err = client.delete_subscription("").unwrap_err();
    assert!(matches!(err, RecurlyError::InvalidInput(_)), "got {err:?}");
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn transaction_create_and_refunds() {
    let tx_xml = document(
        r#"<transaction type="credit_card"><account href="https://api.recurly.test/v2/accounts/1"/><uuid>tx1</uuid><action>purchase</action><amount_in_cents>1000</amount_in_cents><currency>USD</currency><status>success</status></transaction>"#,
    );
    let transport = ScriptedTransport::new().respond(201, &tx_xml).respond(204, "").respond(204, "");
    let client = client(transport.clone());

    let mut tx = Transaction::charge(1000, "USD");
    tx.attach_account(&Account::new("1")).unwrap();
    client.create_transaction(&mut tx).unwrap();
    assert!(body_of(&transport).contains("<amount_in_cents>1000</amount_in_cents><currency>USD</currency>"));
    assert_eq!(tx.uuid, "tx1");

    client.refund_transaction("tx1", 500).unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.url.as_str(), format!("{BASE_URL}transactions/tx1?amount_in_cents=500"));

    client.refund_transaction_in_full("tx1").unwrap();
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}transactions/tx1"));
}

#[test]
fn references_resolve_through_the_transport() {
    let transport = ScriptedTransport::new().respond(200, &document(&account_xml("1")));
    let client = client(transport.clone());

    let invoice = Invoice {
        account: Some(Reference::new("https://api.recurly.test/v2/accounts/1")),
        ..Invoice::default()
    };
    let account = client.resolve(invoice.account.as_ref().unwrap()).unwrap();
    assert_eq!(account.account_code, "1");
    assert_eq!(transport.last_request().url.as_str(), format!("{BASE_URL}accounts/1"));

    let dangling: Reference<Account> = Reference::default();
    assert!(matches!(client.resolve(&dangling), Err(RecurlyError::InvalidInput(_))));
    assert_eq!(transport.call_count(), 1);
}
