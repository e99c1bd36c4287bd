// EventPay Walkthrough - Simulates One Festival Day End to End
// Registration, recharges, payments, rejections, recovery and the audit trail

use anyhow::Result;
use colored::Colorize;
use eventpay_ledger::{AuditFilter, CardId, Config, Ledger, OperationKind, UserId};
use eventpay_terminals::{InquiryTerminal, Organizer, PaymentTerminal};
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn banner(label: &str) {
    let ruler = "=================================================================";
    println!("\n{}", ruler.cyan());
    println!("{}", label.cyan().bold());
    println!("{}\n", ruler.cyan());
}

fn main() -> Result<()> {
    // Ledger operations log through tracing; keep the narration readable by
    // default, RUST_LOG=info shows the structured log underneath
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = Config::from_env()?;
    info!(service = %config.service_name, "Starting walkthrough");

    let ledger = Arc::new(Ledger::new(config));
    let organizer = Organizer::new("ORG001", Arc::clone(&ledger));
    let food_stand = PaymentTerminal::new("TERM001", "Food Stand", Arc::clone(&ledger));
    let beer_garden = PaymentTerminal::new("TERM002", "Beer Garden", Arc::clone(&ledger));
    let inquiry = InquiryTerminal::new("INQ001", Arc::clone(&ledger));

    banner("🎪 EventPay - One Festival Day");

    // 1. Registration desk
    banner("📋 Registration");
    let alfredo = UserId::new("USER001");
    let maria = UserId::new("USER002");
    organizer.create_user(&alfredo, "Alfredo Martinez")?;
    organizer.create_user(&maria, "Maria Lopez")?;
    println!("  {} Registered Alfredo Martinez and Maria Lopez", "✅".green());

    let card_alfredo = CardId::new("CARD001");
    let card_maria = CardId::new("CARD002");
    organizer.issue_card(&card_alfredo, &alfredo, dec!(0))?;
    organizer.issue_card(&card_maria, &maria, dec!(20.00))?;
    println!(
        "  {} Issued {} (empty) and {} (20.00 preloaded)",
        "✅".green(),
        card_alfredo,
        card_maria
    );

    // 2. Recharge booth
    banner("💰 Recharge Booth");
    let receipt = organizer.recharge_card(&card_alfredo, dec!(50.00))?;
    println!(
        "  {} {}: {} now holds {}",
        "✅".green(),
        receipt.transaction_id,
        receipt.card_id,
        receipt.new_balance
    );

    // 3. Merchant stands
    banner("🌭 Merchant Stands");
    let receipt = food_stand.process_payment(&card_alfredo, dec!(15.50))?;
    println!(
        "  {} {} charged 15.50 at {} ({} left)",
        "✅".green(),
        receipt.card_id,
        food_stand.shop_name(),
        receipt.remaining_balance
    );
    let receipt = beer_garden.process_payment(&card_alfredo, dec!(8.00))?;
    println!(
        "  {} {} charged 8.00 at {} ({} left)",
        "✅".green(),
        receipt.card_id,
        beer_garden.shop_name(),
        receipt.remaining_balance
    );

    // 4. Rejections, all leaving the ledger untouched
    banner("⚠️  Rejections");
    if let Err(err) = food_stand.process_payment(&card_maria, dec!(100.00)) {
        println!("  {} {}", "❌".red(), err);
    }
    if let Err(err) = food_stand.process_payment(&CardId::new("GHOST999"), dec!(5.00)) {
        println!("  {} {}", "❌".red(), err);
    }

    organizer.block_card(&card_maria, None)?;
    println!("  {} {} blocked after a reported loss", "🔒".yellow(), card_maria);
    if let Err(err) = food_stand.process_payment(&card_maria, dec!(1.00)) {
        println!("  {} {}", "❌".red(), err);
    }

    beer_garden.set_connection_status(false);
    if let Err(err) = beer_garden.process_payment(&card_alfredo, dec!(1.00)) {
        println!("  {} {}", "❌".red(), err);
    }

    // 5. Recovery: card turns up, link comes back
    banner("🔧 Recovery");
    organizer.activate_card(&card_maria)?;
    let receipt = food_stand.process_payment(&card_maria, dec!(4.00))?;
    println!(
        "  {} {} active again, paid 4.00 ({} left)",
        "✅".green(),
        receipt.card_id,
        receipt.remaining_balance
    );

    beer_garden.set_connection_status(true);
    let receipt = beer_garden.process_payment(&card_alfredo, dec!(2.50))?;
    println!(
        "  {} {} back online, charged 2.50 ({} left)",
        "✅".green(),
        beer_garden.terminal_id(),
        receipt.remaining_balance
    );

    // 6. Inquiry terminal
    banner("🔎 Inquiry Terminal");
    let info = inquiry.check_balance(&card_alfredo)?;
    println!("  {} holds {} ({})", info.card_id, info.balance, info.status);

    let statement = inquiry.view_transaction_history(&card_alfredo)?;
    println!("  History for {} (newest first):", statement.card_id);
    for txn in &statement.transactions {
        println!(
            "    {} {:<8} {:>8}  {}",
            txn.transaction_id,
            txn.kind.to_string(),
            txn.amount,
            txn.description
        );
    }

    let valid = inquiry.list_valid_cards();
    let ids: Vec<&str> = valid.iter().map(|c| c.card_id.as_str()).collect();
    println!("  Valid cards: {}", ids.join(", "));

    let recharges = inquiry.list_recharges(None);
    println!("  Recharges on record: {}", recharges.len());
    for txn in &recharges {
        println!("    {} {:>8}  {}", txn.transaction_id, txn.amount, txn.description);
    }

    // 7. Audit trail and closing checks
    banner("🧾 Audit Trail");
    let payments = ledger.audit_entries(&AuditFilter {
        operation: Some(OperationKind::PaymentMade),
        ..Default::default()
    });
    println!(
        "  {} payment entries out of {} total",
        payments.len(),
        ledger.store().audit_count()
    );
    for entry in ledger.store().audit_entries().iter().take(3) {
        println!("    {} {} by {}", entry.log_id, entry.operation, entry.actor_id);
    }

    banner("📈 Closing");
    let verdict = if ledger.check_conservation() {
        "holds".green()
    } else {
        "violated".red()
    };
    println!("  Money conservation: {}", verdict);
    println!(
        "  Cards issued: {}, transactions recorded: {}",
        ledger.store().card_count(),
        ledger.store().transaction_count()
    );
    println!(
        "  Metric families exported: {}",
        ledger.metrics().registry().gather().len()
    );

    println!("\n{}\n", "🎉 Festival day complete".green().bold());
    Ok(())
}
