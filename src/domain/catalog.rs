use bigdecimal::BigDecimal;

/// One entry of the fixed product catalog. Prices are rupees per kg
/// (per packet for tea).
#[derive(Debug, Clone)]
pub struct CatalogProduct {
    pub id: &'static str,
    pub name: &'static str,
    pub unit_price: BigDecimal,
}

impl CatalogProduct {
    fn new(id: &'static str, name: &'static str, rupees: u32) -> Self {
        CatalogProduct {
            id,
            name,
            unit_price: BigDecimal::from(rupees),
        }
    }
}

/// The shop's fixed assortment. Reference data only: the lifecycle
/// manager accepts whatever selections the presentation layer sends and
/// does not re-derive prices from here.
pub fn products() -> Vec<CatalogProduct> {
    vec![
        CatalogProduct::new("rice", "Rice", 50),
        CatalogProduct::new("wheat", "Wheat", 32),
        CatalogProduct::new("oil", "Cooking Oil", 150),
        CatalogProduct::new("sugar", "Sugar", 44),
        CatalogProduct::new("dal", "Dal (Lentils)", 120),
        CatalogProduct::new("flour", "Wheat Flour", 38),
        CatalogProduct::new("salt", "Salt", 20),
        CatalogProduct::new("tea", "Tea", 280),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_carries_unit_prices() {
        let oil = products()
            .into_iter()
            .find(|p| p.id == "oil")
            .expect("oil is in the catalog");
        assert_eq!(oil.name, "Cooking Oil");
        assert_eq!(oil.unit_price, BigDecimal::from(150));
    }

    #[test]
    fn catalog_ids_are_unique() {
        let all = products();
        for (i, p) in all.iter().enumerate() {
            assert!(
                all.iter().skip(i + 1).all(|q| q.id != p.id),
                "duplicate catalog id {}",
                p.id
            );
        }
    }
}
