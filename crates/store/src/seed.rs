//! Built-in seed data.
//!
//! Each collection hydrates from these lists when its storage key is absent.
//! The content mirrors the launch catalog; slugs here are also what the
//! default navbar links in [`crate::settings`] point at.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use lipoimports_core::{
    BannerId, CategoryId, Email, OrderId, OrderStatus, PaymentMethodId, PaymentProvider,
    ProductId, ShippingCarrier, ShippingIntegrationId, Slug, VideoId,
};
use rust_decimal::Decimal;

use crate::models::{
    Banner, Category, Coupon, Order, OrderItem, PaymentMethod, Product, ShippingIntegration,
    SubCategory, VideoTestimonial,
};

fn slug(s: &str) -> Slug {
    // Seed slugs are static and well-formed.
    Slug::parse(s).unwrap_or_else(|_| unreachable!("invalid seed slug: {s}"))
}

fn email(s: &str) -> Email {
    Email::parse(s).unwrap_or_else(|_| unreachable!("invalid seed email: {s}"))
}

fn timestamp(s: &str) -> DateTime<Utc> {
    s.parse()
        .unwrap_or_else(|_| unreachable!("invalid seed timestamp: {s}"))
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    slug_str: &str,
    description: &str,
    short_description: &str,
    price_cents: i64,
    installment_cents: i64,
    brand: &str,
    is_featured: bool,
    is_best_seller: bool,
    tags: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.into(),
        slug: slug(slug_str),
        description: description.into(),
        short_description: short_description.into(),
        price: Decimal::new(price_cents, 2),
        original_price: None,
        installments: 12,
        installment_price: Decimal::new(installment_cents, 2),
        images: vec!["/placeholder.svg".into()],
        category: slug("canetas-emagrecedoras"),
        brand: brand.into(),
        in_stock: true,
        is_featured,
        is_best_seller,
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

/// Launch product catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "MOUNJARO 15mg (Lilly)",
            "mounjaro-15mg-lilly",
            "Mounjaro (tirzepatida) é um medicamento injetável uma vez por semana, aprovado \
             para o tratamento de diabetes tipo 2 e controle de peso. Produto original \
             importado da Eli Lilly.",
            "Tirzepatida 15mg - Aplicação semanal",
            3300_00,
            275_00,
            "Eli Lilly",
            true,
            true,
            &["tirzepatida", "emagrecimento", "diabetes"],
        ),
        product(
            "2",
            "TG - 15mg (Indufar)",
            "tg-15mg-indufar",
            "Tirzepatida 15mg da Indufar. Fórmula avançada para controle glicêmico e perda de \
             peso. Produto importado com qualidade garantida.",
            "Tirzepatida 15mg - Nova Apresentação",
            1800_00,
            150_00,
            "Indufar",
            true,
            false,
            &["tirzepatida", "emagrecimento"],
        ),
        product(
            "3",
            "RETATRUTIDE 40mg (Synedica)",
            "retatrutide-40mg-synedica",
            "Retatrutide é um agonista triplo de receptores GIP, GLP-1 e glucagon. Produto de \
             última geração para controle de peso.",
            "Triplo agonista 40mg",
            2500_00,
            208_33,
            "Synedica",
            true,
            false,
            &["retatrutide", "emagrecimento"],
        ),
        product(
            "4",
            "MOUNJARO 10mg (Lilly)",
            "mounjaro-10mg-lilly",
            "Mounjaro (tirzepatida) 10mg é indicado para tratamento de diabetes tipo 2 e \
             auxílio na perda de peso. Produto original Eli Lilly.",
            "Tirzepatida 10mg - Aplicação semanal",
            2800_00,
            233_33,
            "Eli Lilly",
            true,
            true,
            &["tirzepatida", "emagrecimento", "diabetes"],
        ),
        product(
            "5",
            "TG - 12,5mg (Indufar)",
            "tg-12-5mg-indufar",
            "Tirzepatida 12,5mg da Indufar. Dosagem intermediária ideal para progressão \
             gradual do tratamento.",
            "Tirzepatida 12,5mg",
            1600_00,
            133_33,
            "Indufar",
            false,
            true,
            &["tirzepatida", "emagrecimento"],
        ),
        product(
            "6",
            "TG - 10mg (Indufar)",
            "tg-10mg-indufar",
            "Tirzepatida 10mg da Indufar. Excelente opção para início de tratamento com boa \
             tolerância.",
            "Tirzepatida 10mg/0,5mL",
            1400_00,
            116_67,
            "Indufar",
            false,
            false,
            &["tirzepatida", "emagrecimento"],
        ),
        product(
            "7",
            "TG - 7,5mg (Indufar)",
            "tg-7-5mg-indufar",
            "Tirzepatida 7,5mg da Indufar. Dosagem para fase inicial do tratamento.",
            "Tirzepatida 7,5mg/0,5mL",
            1200_00,
            100_00,
            "Indufar",
            false,
            false,
            &["tirzepatida", "emagrecimento"],
        ),
        product(
            "8",
            "TG - 5mg (Indufar)",
            "tg-5mg-indufar",
            "Tirzepatida 5mg da Indufar. Dosagem inicial recomendada para novos pacientes.",
            "Tirzepatida 5mg/0,5mL",
            800_00,
            66_67,
            "Indufar",
            false,
            false,
            &["tirzepatida", "emagrecimento"],
        ),
    ]
}

/// Launch categories.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::new("1"),
            name: "Canetas Emagrecedoras".into(),
            slug: slug("canetas-emagrecedoras"),
            description: "Canetas de aplicação para emagrecimento".into(),
            image: "/placeholder.svg".into(),
        },
        Category {
            id: CategoryId::new("2"),
            name: "Vitaminas".into(),
            slug: slug("vitaminas"),
            description: "Suplementos vitamínicos importados".into(),
            image: "/placeholder.svg".into(),
        },
        Category {
            id: CategoryId::new("3"),
            name: "Suplementos".into(),
            slug: slug("suplementos"),
            description: "Suplementos para saúde e bem-estar".into(),
            image: "/placeholder.svg".into(),
        },
    ]
}

/// Subcategories start empty.
#[must_use]
pub fn subcategories() -> Vec<SubCategory> {
    Vec::new()
}

/// Home-page video testimonials.
#[must_use]
pub fn videos() -> Vec<VideoTestimonial> {
    let entries: [(&str, &str, &str, &str, &str, &str); 6] = [
        (
            "1",
            "Unboxing do pedido",
            "https://images.unsplash.com/photo-1607619056574-7b8d3ee536b2?w=400&h=300&fit=crop",
            "https://example.com/video1.mp4",
            "0:22",
            "@cliente_satisfeita",
        ),
        (
            "2",
            "Minha experiência com Mounjaro",
            "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=400&h=300&fit=crop",
            "https://example.com/video2.mp4",
            "0:49",
            "@maria_saude",
        ),
        (
            "3",
            "Chegou meu pedido!",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=300&fit=crop",
            "https://example.com/video3.mp4",
            "1:27",
            "@fit_journey",
        ),
        (
            "4",
            "Review do produto",
            "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&h=300&fit=crop",
            "https://example.com/video4.mp4",
            "0:27",
            "@carla_bem_estar",
        ),
        (
            "5",
            "1 mês usando - Resultados",
            "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400&h=300&fit=crop",
            "https://example.com/video5.mp4",
            "0:48",
            "@transformacao_real",
        ),
        (
            "6",
            "Como aplicar corretamente",
            "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?w=400&h=300&fit=crop",
            "https://example.com/video6.mp4",
            "1:40",
            "@dicas_saude",
        ),
    ];
    entries
        .into_iter()
        .map(
            |(id, title, thumbnail_url, video_url, duration, author)| VideoTestimonial {
                id: VideoId::new(id),
                title: title.into(),
                thumbnail_url: thumbnail_url.into(),
                video_url: video_url.into(),
                duration: duration.into(),
                author: author.into(),
            },
        )
        .collect()
}

/// Demonstration orders, one per status worth showing in the back office.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ord-1"),
            customer_name: "Maria".into(),
            customer_last_name: "Silva".into(),
            customer_email: email("maria@email.com"),
            customer_phone: "(11) 99999-9999".into(),
            customer_cep: "01310-100".into(),
            customer_address: "Av. Paulista, 1000".into(),
            customer_neighborhood: "Bela Vista".into(),
            customer_city: "São Paulo".into(),
            customer_state: "SP".into(),
            items: vec![OrderItem {
                product_id: ProductId::new("1"),
                product_name: "MOUNJARO 15mg (Lilly)".into(),
                quantity: 1,
                price: Decimal::new(3300_00, 2),
            }],
            total: Decimal::new(3300_00, 2),
            status: OrderStatus::Delivered,
            created_at: timestamp("2025-01-20T10:30:00Z"),
            tracking_code: Some("BR123456789".into()),
        },
        Order {
            id: OrderId::new("ord-2"),
            customer_name: "João".into(),
            customer_last_name: "Santos".into(),
            customer_email: email("joao@email.com"),
            customer_phone: "(21) 98888-8888".into(),
            customer_cep: "22041-080".into(),
            customer_address: "Rua Copacabana, 500".into(),
            customer_neighborhood: "Copacabana".into(),
            customer_city: "Rio de Janeiro".into(),
            customer_state: "RJ".into(),
            items: vec![OrderItem {
                product_id: ProductId::new("2"),
                product_name: "TG - 15mg (Indufar)".into(),
                quantity: 2,
                price: Decimal::new(1800_00, 2),
            }],
            total: Decimal::new(3600_00, 2),
            status: OrderStatus::Processing,
            created_at: timestamp("2025-02-01T14:20:00Z"),
            tracking_code: None,
        },
        Order {
            id: OrderId::new("ord-3"),
            customer_name: "Ana".into(),
            customer_last_name: "Oliveira".into(),
            customer_email: email("ana@email.com"),
            customer_phone: "(83) 97777-7777".into(),
            customer_cep: "58000-000".into(),
            customer_address: "Rua das Flores, 200".into(),
            customer_neighborhood: "Centro".into(),
            customer_city: "João Pessoa".into(),
            customer_state: "PB".into(),
            items: vec![OrderItem {
                product_id: ProductId::new("3"),
                product_name: "RETATRUTIDE 40mg (Synedica)".into(),
                quantity: 1,
                price: Decimal::new(2500_00, 2),
            }],
            total: Decimal::new(2500_00, 2),
            status: OrderStatus::Pending,
            created_at: timestamp("2025-02-05T09:15:00Z"),
            tracking_code: None,
        },
    ]
}

/// Default payment method stubs: PIX live, Mercado Pago awaiting credentials.
#[must_use]
pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: PaymentMethodId::new("pm-1"),
            name: "Mercado Pago".into(),
            provider: PaymentProvider::Mercadopago,
            enabled: false,
            config: BTreeMap::from([
                ("publicKey".to_owned(), String::new()),
                ("accessToken".to_owned(), String::new()),
            ]),
        },
        PaymentMethod {
            id: PaymentMethodId::new("pm-2"),
            name: "PIX".into(),
            provider: PaymentProvider::Pix,
            enabled: true,
            config: BTreeMap::from([
                ("pixKey".to_owned(), String::new()),
                ("pixName".to_owned(), "LipoImports".to_owned()),
            ]),
        },
    ]
}

/// Default shipping integration stubs.
#[must_use]
pub fn shipping_integrations() -> Vec<ShippingIntegration> {
    vec![
        ShippingIntegration {
            id: ShippingIntegrationId::new("ship-1"),
            name: "Melhor Envio".into(),
            carrier: ShippingCarrier::MelhorEnvio,
            enabled: false,
            config: BTreeMap::from([
                ("token".to_owned(), String::new()),
                ("sandboxMode".to_owned(), "true".to_owned()),
            ]),
        },
        ShippingIntegration {
            id: ShippingIntegrationId::new("ship-2"),
            name: "Correios".into(),
            carrier: ShippingCarrier::Correios,
            enabled: true,
            config: BTreeMap::new(),
        },
    ]
}

/// Default hero banner.
#[must_use]
pub fn banners() -> Vec<Banner> {
    vec![Banner {
        id: BannerId::new("banner-1"),
        title: "EMAGREÇA COM QUALIDADE E SEGURANÇA".into(),
        subtitle: Some(
            "Produtos importados, originais e com entrega rápida para transformar sua rotina."
                .into(),
        ),
        button_text: Some("COMPRAR AGORA".into()),
        button_link: Some("/loja".into()),
        image: String::new(),
        mobile_image: None,
        is_active: true,
        order: 1,
    }]
}

/// Coupons start empty; they are created from the back office.
#[must_use]
pub fn coupons() -> Vec<Coupon> {
    Vec::new()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_product_slugs_are_unique() {
        let products = products();
        let mut slugs: Vec<_> = products.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), products.len());
    }

    #[test]
    fn test_seed_products_reference_seeded_categories() {
        let category_slugs: Vec<_> = categories().into_iter().map(|c| c.slug).collect();
        assert!(
            products()
                .iter()
                .all(|p| category_slugs.contains(&p.category))
        );
    }

    #[test]
    fn test_seed_order_totals_match_items() {
        for order in orders() {
            let computed: Decimal = order
                .items
                .iter()
                .map(|i| i.price * Decimal::from(i.quantity))
                .sum();
            assert_eq!(order.total, computed, "order {}", order.id);
        }
    }

    #[test]
    fn test_seed_installment_prices_are_consistent() {
        for product in products() {
            let expected =
                (product.price / Decimal::from(product.installments)).round_dp(2);
            assert_eq!(product.installment_price, expected, "product {}", product.id);
        }
    }
}
