// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Initial data: the fixed settings key set and optional demo content.

use sqlx::sqlite::SqlitePool;
use vitrine_common_i18n::{Language, Translated};
use vitrine_content_core::{
	Category, ContactMessage, Faq, Page, PageStatus, Service, Testimonial, SETTING_DEFINITIONS,
};

use crate::category::CategoryRepository;
use crate::contact::ContactRepository;
use crate::error::{DbError, Result};
use crate::faq::FaqRepository;
use crate::page::PageRepository;
use crate::service::ServiceRepository;
use crate::setting::SettingsRepository;
use crate::testimonial::TestimonialRepository;

/// Number of records each seeding step inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
	pub settings: usize,
	pub services: usize,
	pub categories: usize,
	pub pages: usize,
	pub testimonials: usize,
	pub faqs: usize,
	pub contacts: usize,
}

/// Insert missing settings and refresh the metadata of existing ones.
///
/// Returns the number of definitions applied. Values edited by admins are
/// kept.
#[tracing::instrument(skip(pool))]
pub async fn seed_settings(pool: &SqlitePool) -> Result<usize> {
	let repo = SettingsRepository::new(pool.clone());
	for definition in SETTING_DEFINITIONS {
		repo.upsert_definition(definition).await?;
	}
	tracing::info!(count = SETTING_DEFINITIONS.len(), "site settings seeded");
	Ok(SETTING_DEFINITIONS.len())
}

/// Insert the sample services, categories, pages, testimonials, FAQ entries
/// and contact message. Records that already exist are left alone, so the
/// call is safe to repeat.
#[tracing::instrument(skip(pool))]
pub async fn seed_demo_content(pool: &SqlitePool) -> Result<SeedSummary> {
	let mut summary = SeedSummary::default();

	let services = ServiceRepository::new(pool.clone());
	for service in demo_services() {
		if insert_unless_conflict(services.create(&service).await)? {
			summary.services += 1;
		}
	}

	let categories = CategoryRepository::new(pool.clone());
	for category in demo_categories() {
		if insert_unless_conflict(categories.create(&category).await)? {
			summary.categories += 1;
		}
	}

	let pages = PageRepository::new(pool.clone());
	for page in demo_pages() {
		if insert_unless_conflict(pages.create(&page).await)? {
			summary.pages += 1;
		}
	}

	let testimonials = TestimonialRepository::new(pool.clone());
	for testimonial in demo_testimonials() {
		if testimonials.find_by_name(&testimonial.name).await?.is_none() {
			testimonials.create(&testimonial).await?;
			summary.testimonials += 1;
		}
	}

	let faqs = FaqRepository::new(pool.clone());
	for faq in demo_faqs() {
		if faqs.find_by_question(faq.question.base()).await?.is_none() {
			faqs.create(&faq).await?;
			summary.faqs += 1;
		}
	}

	let contacts = ContactRepository::new(pool.clone());
	if contacts.count().await? == 0 {
		let message = ContactMessage::submit(
			"ישראל ישראלי",
			"israel@example.com",
			Some("050-9876543"),
			"שלום, מתעניין בליווי אסטרטגי לחברה שלי. אשמח לתאם שיחה.",
		)
		.map_err(|e| DbError::Internal(e.to_string()))?;
		contacts.create(&message).await?;
		summary.contacts += 1;
	}

	tracing::info!(?summary, "demo content seeded");
	Ok(summary)
}

fn insert_unless_conflict(result: Result<()>) -> Result<bool> {
	match result {
		Ok(()) => Ok(true),
		Err(DbError::Conflict(_)) => Ok(false),
		Err(e) => Err(e),
	}
}

fn tr(he: &str, en: &str, pt: &str) -> Translated {
	Translated::new(he)
		.with_variant(Language::En, en)
		.with_variant(Language::Pt, pt)
}

fn demo_services() -> Vec<Service> {
	let entries = [
		(
			"strategy",
			"Briefcase",
			tr(
				"ייעוץ אסטרטגי ועסקי",
				"Strategic & Business Consulting",
				"Consultoria Estrategica e Empresarial",
			),
			tr(
				"גיבוש מודלים עסקיים, תכנון אסטרטגי והטמעה בשטח עם מדדי ביצוע (KPIs) ברורים.",
				"Building business models, strategic planning and field implementation with clear KPIs.",
				"Desenvolvimento de modelos de negocio, planejamento estrategico e implementacao em campo com KPIs claros.",
			),
			tr(
				"אנחנו עוזרים לארגונים לגשר על הפער בין חזון לבין ביצוע יומיומי.",
				"We help organizations bridge the gap between vision and day-to-day execution.",
				"Ajudamos organizacoes a superar a lacuna entre visao e execucao diaria.",
			),
		),
		(
			"coaching",
			"Users",
			tr(
				"ליווי ואימון מנהלים",
				"Executive Coaching & Training",
				"Coaching e Treinamento Executivo",
			),
			tr(
				"פיתוח מנהיגות, קבלת החלטות תחת לחץ וניהול קריירה למנהלים בכל הדרגים.",
				"Leadership development, decision-making under pressure and career management for executives at all levels.",
				"Desenvolvimento de lideranca, tomada de decisao sob pressao e gestao de carreira para executivos em todos os niveis.",
			),
			tr(
				"מנהיגות אפקטיבית היא המנוע מאחורי כל אסטרטגיה מוצלחת.",
				"Effective leadership is the engine behind every successful strategy.",
				"A lideranca eficaz e o motor por tras de toda estrategia bem-sucedida.",
			),
		),
		(
			"real-estate",
			"Building2",
			tr(
				"ליווי והשקעות נדל״ן",
				"Real Estate Guidance & Investment",
				"Orientacao e Investimento Imobiliario",
			),
			tr(
				"ייעוץ בהקצאת הון לנכסים מניבים בישראל ובפורטוגל, וניהול נכסים ארוך טווח.",
				"Capital allocation advisory for income-generating properties in Israel and Portugal, and long-term asset management.",
				"Assessoria em alocacao de capital para imoveis geradores de renda em Israel e Portugal, e gestao de ativos a longo prazo.",
			),
			tr(
				"אנחנו מלווים משקיעים וארגונים בהקצאת הון לנכסים מניבים.",
				"We guide investors and organizations in allocating capital to income-generating properties.",
				"Orientamos investidores e organizacoes na alocacao de capital em imoveis geradores de renda.",
			),
		),
	];

	entries
		.into_iter()
		.zip(1..)
		.map(|((slug, icon, title, short, full), order)| {
			let mut service = Service::new(slug, title);
			service.icon = icon.to_string();
			service.short_description = short;
			service.full_content = full;
			service.order = order;
			service
		})
		.collect()
}

fn demo_categories() -> Vec<Category> {
	let entries = [
		(
			"general",
			tr("כללי", "General", "Geral"),
			tr("תכנים כלליים", "General content", "Conteudo geral"),
		),
		(
			"branding",
			tr("לוגו ומיתוג", "Logo & Branding", "Logo e Marca"),
			tr("נכסי מיתוג ולוגו", "Branding and logo assets", "Ativos de marca e logo"),
		),
		(
			"website-images",
			tr("תמונות אתר", "Website Images", "Imagens do Site"),
			tr("תמונות לשימוש באתר", "Images for the website", "Imagens para o site"),
		),
	];

	entries
		.into_iter()
		.zip(1..)
		.map(|((slug, name, description), order)| {
			let mut category = Category::new(slug, name);
			category.description = description;
			category.order = order;
			category
		})
		.collect()
}

fn demo_pages() -> Vec<Page> {
	let entries = [
		(
			"home",
			PageStatus::Published,
			tr("עמוד הבית", "Home", "Inicio"),
			tr(
				"אסטרטגיה, ניהול והקצאת הון: ראייה אחת אינטגרטיבית.",
				"Strategy, Management & Capital Allocation: One Integrative Vision.",
				"Estrategia, Gestao e Alocacao de Capital: Uma Visao Integrativa.",
			),
			tr(
				"קבוצת ייעוץ - אסטרטגיה, ניהול והקצאת הון",
				"Consulting Group - Strategy, Management & Capital Allocation",
				"Grupo de Consultoria - Estrategia, Gestao e Alocacao de Capital",
			),
		),
		(
			"approach",
			PageStatus::Published,
			tr("הגישה שלנו", "Our Approach", "Nossa Abordagem"),
			tr(
				"חשיבה חייבת להוביל לביצוע, ביצוע חייב להיות מדיד.",
				"Thinking must lead to execution; execution must be measurable.",
				"O pensamento deve levar a execucao; a execucao deve ser mensuravel.",
			),
			tr(
				"הגישה שלנו - קבוצת ייעוץ",
				"Our Approach - Consulting Group",
				"Nossa Abordagem - Grupo de Consultoria",
			),
		),
		(
			"services-strategy",
			PageStatus::Published,
			tr(
				"ייעוץ אסטרטגי ועסקי",
				"Strategic & Business Consulting",
				"Consultoria Estrategica e Empresarial",
			),
			tr(
				"אנחנו עוזרים לארגונים לגשר על הפער בין חזון לבין ביצוע יומיומי.",
				"We help organizations bridge the gap between vision and day-to-day execution.",
				"Ajudamos organizacoes a superar a lacuna entre visao e execucao diaria.",
			),
			tr(
				"ייעוץ אסטרטגי ועסקי - קבוצת ייעוץ",
				"Strategic & Business Consulting - Consulting Group",
				"Consultoria Estrategica e Empresarial - Grupo de Consultoria",
			),
		),
		(
			"services-coaching",
			PageStatus::Published,
			tr(
				"ליווי ואימון מנהלים",
				"Executive Coaching & Training",
				"Coaching e Treinamento Executivo",
			),
			tr(
				"מנהיגות אפקטיבית היא המנוע מאחורי כל אסטרטגיה מוצלחת.",
				"Effective leadership is the engine behind every successful strategy.",
				"A lideranca eficaz e o motor por tras de toda estrategia bem-sucedida.",
			),
			tr(
				"ליווי ואימון מנהלים - קבוצת ייעוץ",
				"Executive Coaching & Training - Consulting Group",
				"Coaching e Treinamento Executivo - Grupo de Consultoria",
			),
		),
		(
			"services-real-estate",
			PageStatus::Published,
			tr(
				"ליווי והשקעות נדל״ן",
				"Real Estate Guidance & Investment",
				"Orientacao e Investimento Imobiliario",
			),
			tr(
				"אנחנו מלווים משקיעים וארגונים בהקצאת הון לנכסים מניבים.",
				"We guide investors and organizations in allocating capital to income-generating properties.",
				"Orientamos investidores e organizacoes na alocacao de capital em imoveis geradores de renda.",
			),
			tr(
				"ליווי והשקעות נדל״ן - קבוצת ייעוץ",
				"Real Estate Guidance & Investment - Consulting Group",
				"Orientacao e Investimento Imobiliario - Grupo de Consultoria",
			),
		),
		(
			"contact",
			PageStatus::Published,
			tr("יצירת קשר", "Contact Us", "Contato"),
			tr(
				"אנחנו מזמינים אתכם לשיחת היכרות ראשונית.",
				"We invite you to an introductory conversation.",
				"Convidamos voce para uma conversa inicial.",
			),
			tr(
				"יצירת קשר - קבוצת ייעוץ",
				"Contact Us - Consulting Group",
				"Contato - Grupo de Consultoria",
			),
		),
		(
			"about",
			PageStatus::Published,
			tr("אודות", "About", "Sobre"),
			tr(
				"קבוצת הייעוץ שלנו הוקמה מתוך הבנה שהפרדה בין אסטרטגיה לבין ניהול אנשים והקצאת הון היא מלאכותית.",
				"Our consulting group was founded on the understanding that separating strategy from people management and capital allocation is artificial.",
				"Nosso grupo de consultoria foi fundado com a compreensao de que separar estrategia da gestao de pessoas e alocacao de capital e artificial.",
			),
			tr(
				"אודות - קבוצת ייעוץ",
				"About - Consulting Group",
				"Sobre - Grupo de Consultoria",
			),
		),
		(
			"terms",
			PageStatus::Draft,
			tr("תנאי שימוש", "Terms of Use", "Termos de Uso"),
			tr("תנאי שימוש באתר.", "Website terms of use.", "Termos de uso do site."),
			Translated::default(),
		),
	];

	entries
		.into_iter()
		.map(|(slug, status, title, content, meta_title)| {
			let mut page = Page::new(slug, title);
			page.status = status;
			page.content = content;
			page.meta_title = meta_title;
			page
		})
		.collect()
}

fn demo_testimonials() -> Vec<Testimonial> {
	let entries = [
		(
			"דני כהן",
			tr("סמנכ״ל טכנולוגיות", "VP Technology", "VP de Tecnologia"),
			tr("טק סולושנס בע״מ", "Tech Solutions Ltd.", "Tech Solutions Ltda."),
			tr(
				"הליווי האסטרטגי שקיבלנו עזר לנו לזהות הזדמנויות צמיחה שלא ראינו קודם.",
				"The strategic guidance we received helped us identify growth opportunities we hadn't seen before.",
				"A orientacao estrategica que recebemos nos ajudou a identificar oportunidades de crescimento que nao haviamos visto antes.",
			),
		),
		(
			"שרה לוי",
			tr("מנכ״לית", "CEO", "CEO"),
			tr("גלובל מדיה", "Global Media", "Global Media"),
			tr(
				"תהליך האימון הניהולי היה נקודת מפנה בקריירה שלי.",
				"The executive coaching process was a turning point in my career.",
				"O processo de coaching executivo foi um ponto de virada na minha carreira.",
			),
		),
	];

	entries
		.into_iter()
		.zip(1..)
		.map(|((name, role, company, content), order)| {
			let mut testimonial = Testimonial::new(name, content);
			testimonial.role = role;
			testimonial.company = company;
			testimonial.order = order;
			testimonial
		})
		.collect()
}

fn demo_faqs() -> Vec<Faq> {
	let entries = [
		(
			tr(
				"כמה זמן נמשך תהליך ייעוץ אסטרטגי?",
				"How long does a strategic consulting process take?",
				"Quanto tempo dura um processo de consultoria estrategica?",
			),
			tr(
				"תהליך ייעוץ אסטרטגי נמשך בדרך כלל בין 3 ל-6 חודשים, תלוי בהיקף ובמורכבות הארגון.",
				"A strategic consulting process typically takes between 3 and 6 months, depending on the scope and complexity of the organization.",
				"Um processo de consultoria estrategica geralmente leva de 3 a 6 meses, dependendo do escopo e complexidade da organizacao.",
			),
		),
		(
			tr(
				"האם אתם עובדים גם עם חברות קטנות?",
				"Do you also work with small companies?",
				"Voces tambem trabalham com pequenas empresas?",
			),
			tr(
				"כן, אנחנו מלווים ארגונים מכל הגדלים - מסטארטאפים בשלבים מוקדמים ועד חברות ציבוריות.",
				"Yes, we work with organizations of all sizes - from early-stage startups to public companies.",
				"Sim, trabalhamos com organizacoes de todos os tamanhos - desde startups em estagios iniciais ate empresas publicas.",
			),
		),
		(
			tr(
				"מה ההבדל בין ייעוץ לאימון ניהולי?",
				"What is the difference between consulting and executive coaching?",
				"Qual e a diferenca entre consultoria e coaching executivo?",
			),
			tr(
				"ייעוץ מתמקד בארגון ובאסטרטגיה, בעוד אימון ניהולי מתמקד בפיתוח אישי של המנהל.",
				"Consulting focuses on the organization and strategy, while executive coaching focuses on personal development of the manager.",
				"A consultoria foca na organizacao e estrategia, enquanto o coaching executivo foca no desenvolvimento pessoal do gestor.",
			),
		),
	];

	entries
		.into_iter()
		.zip(1..)
		.map(|((question, answer), order)| {
			let mut faq = Faq::new(question, answer);
			faq.order = order;
			faq
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dashboard::DashboardRepository;
	use crate::testing::create_test_pool;
	use vitrine_common_i18n::localize;

	#[tokio::test]
	async fn test_demo_seed_is_repeatable() {
		let pool = create_test_pool().await;
		seed_settings(&pool).await.unwrap();

		let first = seed_demo_content(&pool).await.unwrap();
		assert_eq!(first.services, 3);
		assert_eq!(first.categories, 3);
		assert_eq!(first.pages, 8);
		assert_eq!(first.testimonials, 2);
		assert_eq!(first.faqs, 3);
		assert_eq!(first.contacts, 1);

		let second = seed_demo_content(&pool).await.unwrap();
		assert_eq!(second, SeedSummary::default());

		let counts = DashboardRepository::new(pool).stats().await.unwrap().counts;
		assert_eq!(counts.pages, 8);
		assert_eq!(counts.published_pages, 7);
		assert_eq!(counts.unread_contacts, 1);
	}

	#[tokio::test]
	async fn test_seeded_pages_localize() {
		let pool = create_test_pool().await;
		seed_demo_content(&pool).await.unwrap();

		let about = PageRepository::new(pool)
			.get_published_by_slug("about")
			.await
			.unwrap()
			.unwrap();
		assert_eq!(localize(&about, Some("pt")).title.base(), "Sobre");
		assert_eq!(localize(&about, Some("he")).title.base(), "אודות");
		assert!(about.meta_description.base().is_empty());
	}

	#[tokio::test]
	async fn test_seed_settings_count() {
		let pool = create_test_pool().await;
		assert_eq!(seed_settings(&pool).await.unwrap(), SETTING_DEFINITIONS.len());
		let stored = SettingsRepository::new(pool).list().await.unwrap();
		assert_eq!(stored.len(), SETTING_DEFINITIONS.len());
	}
}
