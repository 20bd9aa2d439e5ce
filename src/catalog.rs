use crate::types::Service;
use lazy_static::lazy_static;

lazy_static! {
    static ref SERVICES: Vec<Service> = vec![
        Service {
            id: "1".into(),
            name: "Hair Cut".into(),
            description: "Professional hair cutting service tailored to your preferences.".into(),
            duration_minutes: 30,
            price_cents: 3500,
            category: "Hair".into(),
            image: "https://images.pexels.com/photos/3993444/pexels-photo-3993444.jpeg".into(),
        },
        Service {
            id: "2".into(),
            name: "Hair Coloring".into(),
            description: "Transform your look with our premium hair coloring services.".into(),
            duration_minutes: 120,
            price_cents: 12000,
            category: "Hair".into(),
            image: "https://images.pexels.com/photos/3993453/pexels-photo-3993453.jpeg".into(),
        },
        Service {
            id: "3".into(),
            name: "Facial Treatment".into(),
            description: "Rejuvenating facial to cleanse, exfoliate and nourish your skin.".into(),
            duration_minutes: 60,
            price_cents: 8500,
            category: "Skin".into(),
            image: "https://images.pexels.com/photos/3985338/pexels-photo-3985338.jpeg".into(),
        },
        Service {
            id: "4".into(),
            name: "Massage Therapy".into(),
            description: "Relaxing massage to reduce stress and relieve muscle tension.".into(),
            duration_minutes: 60,
            price_cents: 9000,
            category: "Wellness".into(),
            image: "https://images.pexels.com/photos/3997993/pexels-photo-3997993.jpeg".into(),
        },
        Service {
            id: "5".into(),
            name: "Manicure".into(),
            description: "Professional nail care and polish application.".into(),
            duration_minutes: 45,
            price_cents: 4000,
            category: "Nails".into(),
            image: "https://images.pexels.com/photos/4210341/pexels-photo-4210341.jpeg".into(),
        },
        Service {
            id: "6".into(),
            name: "Pedicure".into(),
            description: "Luxurious foot treatment including scrub, massage and polish.".into(),
            duration_minutes: 60,
            price_cents: 5000,
            category: "Nails".into(),
            image: "https://images.pexels.com/photos/3997979/pexels-photo-3997979.jpeg".into(),
        },
    ];
}

pub fn services() -> &'static [Service] {
    &SERVICES
}

pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

/// Distinct categories in catalog order.
pub fn service_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for service in SERVICES.iter() {
        if !categories.contains(&service.category.as_str()) {
            categories.push(service.category.as_str());
        }
    }
    categories
}

pub fn services_by_category(category: &str) -> Vec<&'static Service> {
    SERVICES
        .iter()
        .filter(|service| service.category == category)
        .collect()
}
