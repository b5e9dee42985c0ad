use basket_shipping::{
    Basket, FlatRateShipping, GroupRegionShipping, LineItem, PerRegionShipping, Region,
    ShippingCalculator, ShippingStrategy,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_flat_rate_shipping_option() {
    for rate in [Decimal::ZERO, dec!(0.01), dec!(1.5), dec!(12.345)] {
        let flat = FlatRateShipping::new(rate).shared();
        let amount = flat.amount(&LineItem::new(flat.clone()), Some(&Basket::default()));
        assert_eq!(amount, rate, "Flat rate shipping not correct.");
    }
}

#[test]
fn test_per_region_shipping_option() {
    let per_region =
        PerRegionShipping::new([(Region::Uk, dec!(0.75)), (Region::Europe, dec!(1.5))]).shared();

    let europe = LineItem::new(per_region.clone()).with_region(Region::Europe);
    assert_eq!(per_region.amount(&europe, Some(&Basket::default())), dec!(1.5));

    let uk = LineItem::new(per_region.clone()).with_region(Region::Uk);
    assert_eq!(per_region.amount(&uk, Some(&Basket::default())), dec!(0.75));
}

#[test]
fn test_basket_shipping_total() {
    let per_region =
        PerRegionShipping::new([(Region::Uk, dec!(0.75)), (Region::Europe, dec!(1.5))]).shared();
    let flat = FlatRateShipping::new(dec!(1.1)).shared();

    let basket = Basket::new(vec![
        LineItem::new(per_region.clone()).with_region(Region::Uk),
        LineItem::new(per_region.clone()).with_region(Region::Europe),
        LineItem::new(flat),
    ]);

    let total = ShippingCalculator::new().calculate_shipping(Some(&basket));
    assert_eq!(total, dec!(3.35));
}

#[test]
fn test_group_region_shipping_option() {
    let mut next_id = 1;
    let mut id = || {
        next_id += 1;
        next_id - 1
    };

    let group = GroupRegionShipping::with_deduction(
        [
            (Region::Uk, dec!(0.75)),
            (Region::Europe, dec!(1.5)),
            (Region::RestOfTheWorld, dec!(2.5)),
        ],
        dec!(0.3),
    )
    .shared();

    let basket = Basket::new(vec![
        LineItem::new(group.clone()).with_id(id()).with_region(Region::Europe),
        LineItem::new(group.clone()).with_id(id()).with_region(Region::Uk),
    ]);

    let europe = LineItem::new(group.clone()).with_id(id()).with_region(Region::Europe);
    assert_eq!(group.amount(&europe, Some(&basket)), dec!(1.2));

    let uk = LineItem::new(group.clone()).with_id(id()).with_region(Region::Uk);
    assert_eq!(group.amount(&uk, Some(&basket)), dec!(0.45));

    let rest = LineItem::new(group.clone()).with_id(id()).with_region(Region::RestOfTheWorld);
    assert_eq!(group.amount(&rest, Some(&basket)), dec!(2.5));
}

#[test]
fn test_basket_shipping_total_with_group_region_shipping_option() {
    let costs = [
        (Region::Uk, dec!(0.76)),
        (Region::Europe, dec!(1.67)),
        (Region::RestOfTheWorld, dec!(2.75)),
    ];
    let per_region = PerRegionShipping::new(costs).shared();
    let group = GroupRegionShipping::with_deduction(costs, dec!(0.4)).shared();
    let flat = FlatRateShipping::new(dec!(1.1)).shared();

    let basket = Basket::new(vec![
        LineItem::new(per_region.clone()).with_region(Region::Uk),
        LineItem::new(per_region.clone()).with_region(Region::Europe),
        LineItem::new(flat),
        LineItem::new(group.clone()).with_id(1).with_region(Region::RestOfTheWorld),
        LineItem::new(group.clone()).with_id(2).with_region(Region::RestOfTheWorld),
        LineItem::new(group.clone()).with_id(3).with_region(Region::Uk),
        LineItem::new(group.clone()).with_id(4).with_region(Region::Uk),
        LineItem::new(group.clone()).with_id(5).with_region(Region::Europe),
    ]);

    let calculator = ShippingCalculator::new();
    assert_eq!(calculator.calculate_shipping(Some(&basket)), dec!(11.42));
    assert_eq!(calculator.try_calculate_shipping(Some(&basket)).unwrap(), dec!(11.42));
    assert_eq!(calculator.quote(Some(&basket)).total, dec!(11.42));
}

#[test]
fn test_identical_configuration_does_not_group() {
    let costs = [(Region::Europe, dec!(1.67))];
    let first = GroupRegionShipping::with_deduction(costs, dec!(0.4)).shared();
    let second = GroupRegionShipping::with_deduction(costs, dec!(0.4)).shared();

    let basket = Basket::new(vec![
        LineItem::new(first).with_supplier(3).with_region(Region::Europe),
        LineItem::new(second).with_supplier(3).with_region(Region::Europe),
    ]);

    assert_eq!(
        ShippingCalculator::new().calculate_shipping(Some(&basket)),
        dec!(3.34)
    );
}

#[test]
fn test_absent_basket_costs_nothing() {
    assert_eq!(ShippingCalculator::new().calculate_shipping(None), Decimal::ZERO);
}
