use super::*;

#[test]
fn grouped_separators() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(47), "47");
    assert_eq!(format_grouped(999), "999");
    assert_eq!(format_grouped(5_420), "5,420");
    assert_eq!(format_grouped(18_500), "18,500");
    assert_eq!(format_grouped(125_000), "125,000");
    assert_eq!(format_grouped(1_000_000), "1,000,000");
}

#[test]
fn counter_floors_before_grouping() {
    assert_eq!(format_counter(18_500.97), "18,500");
    assert_eq!(format_counter(0.4), "0");
    assert_eq!(format_counter(-3.0), "0");
}

#[test]
fn money_always_two_decimals() {
    assert_eq!(format_money(299.0), "$299.00");
    assert_eq!(format_money(239.2), "$239.20");
}

#[test]
fn price_drops_decimals_for_whole_amounts() {
    assert_eq!(format_price(299.0), "$299");
    assert_eq!(format_price(29.5), "$29.50");
}

#[test]
fn percent_rounds_to_whole() {
    assert_eq!(format_percent(0.2), "20%");
    assert_eq!(format_percent(0.154), "15%");
    assert_eq!(format_percent(0.155), "16%");
}

#[test]
fn discount_two_decimal_contract() {
    // price=299, discount=0.2 -> 239.20 after 2-decimal rounding.
    let price = discounted_price(299.0, Some(0.2));
    assert_eq!(format_money(price), "$239.20");
    assert_eq!(discounted_price(299.0, None), 299.0);
}
