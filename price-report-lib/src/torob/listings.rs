use crate::torob::dto::PriceEntry;

pub const PRODUCT_NAME: &str = "Samsung Galaxy A56 5G";
pub const SOURCE: &str = "torob.com";

pub const A56_128GB_8GB: PriceEntry = PriceEntry::new("128GB/8GB", 32_750_000, SOURCE);
pub const A56_256GB_12GB: PriceEntry = PriceEntry::new("256GB/12GB", 36_230_000, SOURCE);

pub const LISTINGS: [PriceEntry; 2] = [A56_128GB_8GB, A56_256GB_12GB];

// The 256GB/8GB combination never showed up in the search results, only 256GB/12GB did.
pub const NOTES: [&str; 4] = [
    "قیمت\u{200c}ها از جستجوی Google در سایت torob.com استخراج شده",
    "مدل 256GB/8GB در نتایج مشاهده نشد",
    "قیمت\u{200c}ها ممکن است تغییر کنند",
    "برای آخرین قیمت\u{200c}ها به torob.com مراجعه کنید",
];

pub const SEARCH_QUERY: &str = "گوشی سامسونگ A56 5G | حافظه 256 رم 8 گیگابایت site:torob.com";
