// listing column (index page)
//  ├── .move-in-date
//  ├── .area_in_cm            "2 rum, 54 <span>m²</span>"
//  └── .address_link
//       └── a[href]           ".../lagenhet/12345"
//
// detail page
//  ├── shorthand detail       <p>Sortering: Poängsystem</p>
//  ├── transparency           <p>Publicerad för 3 timmar sedan</p>
//  ├── stats list
//  │    └── stat              <p>Hyra</p><p>8 450 kr</p>
//  └── amenities
//       └── amenity           <p>Hiss</p> + exists marker

/// One listing as it appears on the index page.
/// Missing sub-elements become empty strings, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRecord {
    pub id: String,
    pub address: String,
    pub href: String,
    pub rooms: String,
    pub area: String,
    pub move_in_date: String,
}

/// Fields only available on the listing's detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailEnrichment {
    pub apply_type: String,
    pub new_upload: bool,
    pub rent: String,
    pub floor: String,
    pub elevator: bool,
    pub patio: bool,
    pub balcony: bool,
}
