//! Printable receipt for a persisted order: a self-contained HTML
//! document the admin dashboard opens and hands to the browser's print
//! dialog. Pure formatting; nothing flows back from here.

use std::env;
use std::fmt::Write;

use crate::domain::order::OrderSnapshot;

/// Letterhead details printed on every receipt.
#[derive(Debug, Clone)]
pub struct ShopProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl ShopProfile {
    /// Read the profile from `SHOP_NAME` / `SHOP_ADDRESS` / `SHOP_PHONE`,
    /// falling back to the letterhead of the shop this service was built
    /// for.
    pub fn from_env() -> Self {
        ShopProfile {
            name: env::var("SHOP_NAME")
                .unwrap_or_else(|_| "Vasavi Tent House and Decorations".to_string()),
            address: env::var("SHOP_ADDRESS")
                .unwrap_or_else(|_| "Cherupally Village, Dist Mulugu - 506172".to_string()),
            phone: env::var("SHOP_PHONE").unwrap_or_else(|_| "9121154704".to_string()),
        }
    }
}

/// Minimal HTML escaping for text interpolated into the document.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(order: &OrderSnapshot, shop: &ShopProfile) -> String {
    let mut rows = String::new();
    for (index, line) in order.selections.iter().enumerate() {
        // write! into a String cannot fail
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            index + 1,
            escape(&line.product_name),
            line.quantity,
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Receipt - {name}</title>
<style>
  body {{ font-family: Arial, sans-serif; margin: 20px; color: #333; }}
  .header {{ text-align: center; margin-bottom: 30px; }}
  .company-name {{ font-size: 24px; font-weight: bold; color: #7F1D1D; margin: 10px 0; }}
  .company-info {{ font-size: 14px; color: #666; margin: 5px 0; }}
  .customer-section {{ margin: 30px 0; border-bottom: 2px solid #7F1D1D; padding-bottom: 15px; }}
  .customer-title {{ font-size: 18px; font-weight: bold; color: #7F1D1D; margin-bottom: 10px; }}
  .customer-info {{ display: flex; justify-content: space-between; margin: 5px 0; }}
  .products-table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
  .products-table th, .products-table td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
  .products-table th {{ background-color: #7F1D1D; color: white; }}
  .total-section {{ margin-top: 20px; text-align: right; }}
  .total-amount {{ font-size: 20px; font-weight: bold; color: #7F1D1D; }}
  .footer {{ margin-top: 40px; text-align: center; font-size: 14px; color: #7F1D1D; font-weight: bold; }}
  .footer-note {{ margin-top: 10px; font-size: 12px; color: #666; font-weight: normal; }}
  @media print {{ body {{ margin: 0; }} }}
</style>
</head>
<body>
<div class="header">
  <div class="company-name">{shop_name}</div>
  <div class="company-info">{shop_address}</div>
  <div class="company-info">Phone: {shop_phone}</div>
</div>
<div class="customer-section">
  <div class="customer-title">Customer Details</div>
  <div class="customer-info"><span><strong>Name:</strong> {name}</span><span><strong>Date:</strong> {date}</span></div>
  <div class="customer-info"><span><strong>Phone:</strong> {phone}</span></div>
  <div class="customer-info"><span><strong>Village:</strong> {village}</span></div>
</div>
<table class="products-table">
  <thead><tr><th>S.No</th><th>Item</th><th>Quantity</th></tr></thead>
  <tbody>{rows}</tbody>
</table>
<div class="total-section">
  <div class="total-amount">Total Amount: ₹{total}</div>
</div>
<div class="footer">
  <p>Thank you for choosing {shop_name}!</p>
  <p class="footer-note">This is a computer generated receipt.</p>
</div>
</body>
</html>
"#,
        name = escape(&order.customer.name),
        date = order.created_at.format("%d/%m/%Y"),
        phone = escape(&order.customer.phone),
        village = escape(&order.customer.village),
        rows = rows,
        total = order.total_bill,
        shop_name = escape(&shop.name),
        shop_address = escape(&shop.address),
        shop_phone = escape(&shop.phone),
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::order::{Customer, OrderStatus, ProductSelection};

    fn shop() -> ShopProfile {
        ShopProfile {
            name: "Vasavi Tent House and Decorations".to_string(),
            address: "Cherupally Village, Dist Mulugu - 506172".to_string(),
            phone: "9121154704".to_string(),
        }
    }

    fn order(name: &str) -> OrderSnapshot {
        let at = Utc.with_ymd_and_hms(2025, 7, 2, 9, 30, 0).unwrap();
        OrderSnapshot {
            id: Uuid::new_v4(),
            customer: Customer {
                name: name.to_string(),
                phone: "9000000000".to_string(),
                village: "Cherupally".to_string(),
            },
            selections: vec![ProductSelection {
                product_id: "rice".to_string(),
                product_name: "Rice".to_string(),
                unit_price: BigDecimal::from_str("50").unwrap(),
                quantity: BigDecimal::from_str("2").unwrap(),
                received_quantity: None,
            }],
            total_bill: BigDecimal::from_str("100.00").unwrap(),
            status: OrderStatus::Pending,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn receipt_carries_customer_and_shop_details() {
        let html = render(&order("Asha"), &shop());

        assert!(html.contains("Asha"));
        assert!(html.contains("9000000000"));
        assert!(html.contains("Cherupally"));
        assert!(html.contains("Vasavi Tent House and Decorations"));
        assert!(html.contains("Rice"));
        assert!(html.contains("Total Amount: ₹100.00"));
    }

    #[test]
    fn receipt_formats_date_day_first() {
        let html = render(&order("Asha"), &shop());
        assert!(html.contains("02/07/2025"));
    }

    #[test]
    fn receipt_escapes_markup_in_customer_fields() {
        let html = render(&order("<script>alert(1)</script>"), &shop());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn receipt_numbers_product_rows() {
        let mut o = order("Asha");
        o.selections.push(ProductSelection {
            product_id: "tea".to_string(),
            product_name: "Tea".to_string(),
            unit_price: BigDecimal::from_str("280").unwrap(),
            quantity: BigDecimal::from_str("1").unwrap(),
            received_quantity: None,
        });
        let html = render(&o, &shop());
        assert!(html.contains("<tr><td>1</td><td>Rice</td>"));
        assert!(html.contains("<tr><td>2</td><td>Tea</td>"));
    }
}
