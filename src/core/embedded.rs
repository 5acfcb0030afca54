use crate::core::catalog::PlaceCatalog;
use crate::domain::model::PlaceRecord;

/// Category keys in the order the map offers them.
pub const CATEGORY_KEYS: [&str; 13] = [
    "food",
    "refill",
    "clothing",
    "eco-friendly",
    "secondhand",
    "recycling",
    "compost",
    "garden",
    "bike",
    "transit",
    "coffee",
    "local",
    "community",
];

/// The built-in catalog of sustainable places around Princeton, NJ.
pub fn embedded_catalog() -> PlaceCatalog {
    PlaceCatalog::from_tagged(&CATEGORY_KEYS, embedded_places())
}

fn embedded_places() -> Vec<PlaceRecord> {
    vec![
        PlaceRecord::new(
            "Whole Earth Center",
            "360 Nassau St, Princeton, NJ 08540",
            "Natural and organic grocery with a vegetarian deli",
            (40.3545, -74.6529),
            &["food", "organic", "grocery"],
        ),
        PlaceRecord::new(
            "Jammin' Crepes",
            "20 Nassau St, Princeton, NJ 08542",
            "Crepes made with ingredients from local farms",
            (40.3503, -74.6604),
            &["food", "local", "organic"],
        ),
        PlaceRecord::new(
            "Agricola Eatery",
            "11 Witherspoon St, Princeton, NJ 08542",
            "Farm-to-table restaurant supplied by its own farm",
            (40.3502, -74.6594),
            &["food", "farm-to-table", "local"],
        ),
        PlaceRecord::new(
            "Princeton Farmers' Market",
            "Dinky Station Plaza, Princeton, NJ 08540",
            "Seasonal market with regional growers and bakers",
            (40.3434, -74.6603),
            &["food", "local", "market"],
        ),
        PlaceRecord::new(
            "Arlee's Raw Blends",
            "4 Chambers St, Princeton, NJ 08542",
            "Cold-pressed juices and plant-based bowls",
            (40.3497, -74.6584),
            &["food", "vegan", "juice"],
        ),
        PlaceRecord::new(
            "Terra Refillery",
            "180 Nassau St, Princeton, NJ 08542",
            "Refill station for soaps, detergents and pantry staples",
            (40.3513, -74.6563),
            &["refill", "zero-waste", "eco-friendly"],
        ),
        PlaceRecord::new(
            "The Refill Room",
            "301 N Harrison St, Princeton, NJ 08540",
            "Bring your own containers for bulk household goods",
            (40.3631, -74.6447),
            &["refill", "zero-waste"],
        ),
        PlaceRecord::new(
            "Fill Good Co.",
            "33 Witherspoon St, Princeton, NJ 08542",
            "Plastic-free personal care refills",
            (40.3515, -74.6597),
            &["refill"],
        ),
        PlaceRecord::new(
            "Nassau Thrift Shop",
            "106 Nassau St, Princeton, NJ 08542",
            "Donated clothing and accessories",
            (40.3509, -74.6581),
            &["clothing", "secondhand", "thrift"],
        ),
        PlaceRecord::new(
            "Evergreen Outfitters",
            "44 Hulfish St, Princeton, NJ 08542",
            "Outdoor apparel made from recycled fabrics",
            (40.3498, -74.6611),
            &["clothing", "eco-friendly"],
        ),
        PlaceRecord::new(
            "Second Chance Apparel",
            "12 Chambers St, Princeton, NJ 08542",
            "Consignment clothing for adults and kids",
            (40.3493, -74.6586),
            &["clothing"],
        ),
        PlaceRecord::new(
            "Nearly New Consignment",
            "3535 US-1, Princeton, NJ 08540",
            "Consignment furniture, housewares and clothing",
            (40.3201, -74.6206),
            &["clothing", "secondhand", "home"],
        ),
        PlaceRecord::new(
            "Greenleaf Home Goods",
            "259 Nassau St, Princeton, NJ 08540",
            "Household products free of single-use plastic",
            (40.3530, -74.6545),
            &["eco-friendly", "home", "zero-waste"],
        ),
        PlaceRecord::new(
            "Sustainable Princeton",
            "1 Monument Dr, Princeton, NJ 08540",
            "Community sustainability office and workshops",
            (40.3538, -74.6656),
            &["community", "education", "eco-friendly"],
        ),
        PlaceRecord::new(
            "Princeton Record Exchange",
            "20 S Tulane St, Princeton, NJ 08542",
            "Used vinyl, CDs and films",
            (40.3496, -74.6606),
            &["secondhand", "music"],
        ),
        PlaceRecord::new(
            "Labyrinth Books",
            "122 Nassau St, Princeton, NJ 08542",
            "Independent bookstore with a used book section",
            (40.3507, -74.6577),
            &["secondhand", "books", "local"],
        ),
        PlaceRecord::new(
            "Mercer County Recycling Drop-off",
            "300 Lawrence Station Rd, Princeton, NJ 08540",
            "Drop-off for electronics, batteries and bulky recyclables",
            (40.3005, -74.6731),
            &["recycling", "e-waste"],
        ),
        PlaceRecord::new(
            "Princeton Battery Return",
            "400 Witherspoon St, Princeton, NJ 08540",
            "Battery and light bulb collection point",
            (40.3612, -74.6661),
            &["recycling"],
        ),
        PlaceRecord::new(
            "Repair Cafe Princeton",
            "65 Witherspoon St, Princeton, NJ 08542",
            "Volunteers fix small appliances, clothing and bikes",
            (40.3527, -74.6606),
            &["repair", "recycling", "community"],
        ),
        PlaceRecord::new(
            "Princeton Compost Drop-off",
            "1 River Rd, Princeton, NJ 08540",
            "Municipal food scrap collection",
            (40.3612, -74.6304),
            &["compost", "recycling"],
        ),
        PlaceRecord::new(
            "Herrontown Community Garden",
            "Herrontown Rd, Princeton, NJ 08540",
            "Shared garden plots with a compost program",
            (40.3772, -74.6401),
            &["garden", "community", "compost"],
        ),
        PlaceRecord::new(
            "Princeton Public Library Seed Library",
            "65 Witherspoon St, Princeton, NJ 08542",
            "Borrow heirloom seeds and return saved seeds",
            (40.3526, -74.6603),
            &["garden", "community", "education"],
        ),
        PlaceRecord::new(
            "D&R Greenway Native Plant Nursery",
            "1 Preservation Pl, Princeton, NJ 08540",
            "Native plants for pollinator gardens",
            (40.3380, -74.6353),
            &["garden", "native-plants"],
        ),
        PlaceRecord::new(
            "Kopp's Cycle",
            "38 Spring St, Princeton, NJ 08542",
            "Bike sales, rentals and repair",
            (40.3512, -74.6608),
            &["bike", "repair"],
        ),
        PlaceRecord::new(
            "Princeton Bike Share Hub",
            "Palmer Square, Princeton, NJ 08542",
            "Dockless bike and scooter pickup point",
            (40.3500, -74.6613),
            &["bike", "transit"],
        ),
        PlaceRecord::new(
            "Spring Street EV Charging",
            "Spring Street Garage, Princeton, NJ 08542",
            "Public electric vehicle chargers",
            (40.3516, -74.6615),
            &["ev-charging", "transit"],
        ),
        PlaceRecord::new(
            "Small World Coffee",
            "14 Witherspoon St, Princeton, NJ 08542",
            "Fair-trade coffee with a reusable cup discount",
            (40.3505, -74.6597),
            &["coffee", "fair-trade"],
        ),
        PlaceRecord::new(
            "Rojo's Roastery",
            "11 Spring St, Princeton, NJ 08542",
            "Small-batch roaster sourcing direct-trade beans",
            (40.3514, -74.6602),
            &["coffee", "fair-trade", "local"],
        ),
        PlaceRecord::new(
            "The Bent Spoon",
            "35 Palmer Square W, Princeton, NJ 08542",
            "Ice cream from local and organic ingredients",
            (40.3503, -74.6620),
            &["dessert", "local", "organic"],
        ),
        PlaceRecord::new(
            "Trenton Area Soup Kitchen Garden",
            "72 1/2 Escher St, Trenton, NJ 08609",
            "Volunteer garden growing produce for meals",
            (40.2290, -74.7475),
            &["garden", "community", "volunteer"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_places() {
        let catalog = embedded_catalog();
        for key in CATEGORY_KEYS {
            let places = catalog.get(key).unwrap();
            assert!(!places.is_empty(), "no places under {key}");
            assert!(places.iter().all(|p| p.has_tag(key)));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let places = embedded_places();
        let mut names: Vec<&str> = places.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), places.len());
    }

    #[test]
    fn test_every_place_is_reachable_from_a_key() {
        let catalog = embedded_catalog();
        assert_eq!(catalog.len(), embedded_places().len());
    }

    #[test]
    fn test_every_place_has_tags() {
        assert!(embedded_places().iter().all(|p| !p.categories.is_empty()));
    }
}
