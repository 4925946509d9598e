//! Built-in deck discovery.
//!
//! This module provides [`all_decks`], the single entry-point for loading
//! the decks that ship with Showreel.  It abstracts over the discovery
//! strategy so callers do not need to know where decks live on disk.
//!
//! # Deck resolution order
//!
//! Decks are searched in this priority order, stopping at the first
//! directory that exists and returns at least one valid deck:
//!
//! 1. **`$SHOWREEL_DECKS_DIR`**: environment variable override.  Set this
//!    in `.env` or your shell profile to point at a custom deck collection.
//! 2. **`./decks`**: relative to the current working directory.
//! 3. **`<executable-dir>/decks`**: sibling to the `showreel` binary.
//!    Useful when the binary is installed into `/usr/local/bin` alongside a
//!    `decks/` directory.
//! 4. **`../decks`**: one level above CWD.  Convenient during development
//!    when running `cargo run` from `target/debug/`.
//!
//! If no directory is found or all directories are empty, [`all_decks`]
//! falls back to the [`hardcoded`] decks compiled into the binary, so the
//! CLI always has something to show.
//!
//! # Environment variable
//!
//! ```env
//! SHOWREEL_DECKS_DIR=./decks
//! ```
//!
//! Relative paths are resolved against the current working directory at the
//! time [`all_decks`] is called.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use showreel_core::domain::{Card, Category, Deck, DeckId, DomainError, Language};

use crate::deck_loader::FilesystemDeckLoader;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load all decks using the resolution order described in the module docs.
///
/// # Return value
///
/// - `Ok(decks)`: from the first directory that yielded at least one deck,
///   or the compiled-in decks when no directory was found.
/// - `Err(DomainError::InvalidDeck)`: a decks directory was found but could
///   not be read (permissions failure, I/O error).  Individual decks inside
///   a valid directory that fail to parse are **skipped with a warning**
///   rather than propagating an error.
#[instrument]
pub fn all_decks() -> Result<Vec<Deck>, DomainError> {
    for candidate in candidate_paths() {
        debug!(path = %candidate.display(), "checking candidate decks path");

        if !candidate.exists() {
            debug!(path = %candidate.display(), "path does not exist, skipping");
            continue;
        }

        let loader = FilesystemDeckLoader::new(&candidate);
        let decks = loader.load_all()?; // propagate directory-read failures

        if decks.is_empty() {
            debug!(
                path = %candidate.display(),
                "directory exists but contains no decks, trying next"
            );
            continue;
        }

        info!(
            path  = %candidate.display(),
            count = decks.len(),
            "decks loaded successfully"
        );
        return Ok(decks);
    }

    info!("no decks directory found; using compiled-in decks");
    hardcoded::all()
}

// ── Resolution helpers ────────────────────────────────────────────────────────

/// Build the ordered list of candidate paths to probe.
///
/// The order matches the documented priority.  Missing env-var or
/// unresolvable exe paths are silently omitted.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    // 1. Explicit environment variable.
    if let Ok(env_dir) = std::env::var("SHOWREEL_DECKS_DIR") {
        let p = PathBuf::from(env_dir);
        debug!(path = %p.display(), "candidate from $SHOWREEL_DECKS_DIR");
        paths.push(p);
    }

    // 2. ./decks (CWD-relative).
    paths.push(PathBuf::from("decks"));

    // 3. <executable-dir>/decks.
    if let Some(exe_sibling) = exe_sibling_decks() {
        debug!(path = %exe_sibling.display(), "candidate from exe sibling");
        paths.push(exe_sibling);
    }

    // 4. ../decks (development fallback).
    paths.push(PathBuf::from("../decks"));

    paths
}

/// Return `<directory of current executable>/decks`, or `None` if the
/// executable path cannot be determined (some platforms / test runners).
fn exe_sibling_decks() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("decks")))
}

// ── Compiled-in decks ─────────────────────────────────────────────────────────

/// The decks compiled into the binary: one per showcase topic.
///
/// Card payloads are display content only; the carousel never inspects
/// them.
pub mod hardcoded {
    use super::*;

    /// All compiled-in decks.
    pub fn all() -> Result<Vec<Deck>, DomainError> {
        Ok(vec![fullstack()?, infrastructure()?, integration()?])
    }

    /// Full-stack engineering snippets: Rails, GraphQL, React, and friends.
    pub fn fullstack() -> Result<Deck, DomainError> {
        Deck::new(
            DeckId::new("fullstack"),
            "Full-Stack Engineering",
            "API, frontend, and background-job snippets across the stack",
            vec![
                Card::new(
                    "Ruby on Rails API Endpoint",
                    Language::Ruby,
                    r#"class Api::V1::ProductsController < ApplicationController
  before_action :set_product, only: [:show, :update, :destroy]

  def index
    @products = Product.includes(:category)
                      .where(active: true)
                      .order(created_at: :desc)

    render json: @products,
           each_serializer: ProductSerializer,
           status: :ok
  end

  private

  def product_params
    params.require(:product)
          .permit(:name, :price, :category_id)
  end
end"#,
                    "RESTful API endpoint with proper serialization and error handling",
                ),
                Card::new(
                    "GraphQL Query Resolution",
                    Language::Ruby,
                    r#"module Types
  class QueryType < Types::BaseObject
    field :products, [Types::ProductType],
          null: false,
          description: "Returns a list of products"

    def products
      Product.includes(:category)
            .with_attached_images
            .order(created_at: :desc)
    end

    def product(id:)
      Product.find_by(id: id)
    end
  end
end"#,
                    "GraphQL query implementation with efficient database queries",
                ),
                Card::new(
                    "Background Job Processing",
                    Language::Ruby,
                    r#"class ProductAnalyticsJob < ApplicationJob
  queue_as :analytics

  def perform(product_id)
    product = Product.find(product_id)

    Analytics.transaction do
      update_view_count(product)
      calculate_trending_score(product)
      notify_if_trending(product)
    end
  rescue => e
    Rails.logger.error("Analytics failed: #{e.message}")
    notify_admin_of_failure(product_id, e)
  end
end"#,
                    "Sidekiq background job with error handling and transaction management",
                ),
                Card::new(
                    "React Component with TypeScript",
                    Language::TypeScript,
                    r#"export const ProductCard: React.FC<ProductCardProps> = ({
  product,
  onAddToCart
}) => {
  const [isLoading, setIsLoading] = useState(false);

  const handleAddToCart = async () => {
    setIsLoading(true);
    try {
      await onAddToCart(product.id);
    } finally {
      setIsLoading(false);
    }
  };

  return (
    <button onClick={handleAddToCart} disabled={isLoading}>
      {isLoading ? 'Adding...' : 'Add to Cart'}
    </button>
  );
};"#,
                    "React component with TypeScript and state management",
                ),
                Card::new(
                    "Modern JavaScript with Ajax",
                    Language::JavaScript,
                    r#"class ProductService {
  constructor(baseUrl) {
    this.baseUrl = baseUrl;
  }

  async fetchProducts(category) {
    const response = await fetch(
      `${this.baseUrl}/api/products?${new URLSearchParams({
        category,
        active: true
      })}`
    );

    if (!response.ok) {
      throw new Error('Network response was not ok');
    }

    return response.json();
  }
}"#,
                    "Modern JavaScript service with async/await and error handling",
                ),
                Card::new(
                    "Backbone.js Model & Collection",
                    Language::JavaScript,
                    r#"const Product = Backbone.Model.extend({
  defaults: {
    name: '',
    price: 0,
    active: true
  },

  validate: function(attrs) {
    if (!attrs.name) {
      return 'Name is required';
    }
    if (attrs.price < 0) {
      return 'Price must be positive';
    }
  }
});

const ProductCollection = Backbone.Collection.extend({
  model: Product,
  url: '/api/products',

  activeProducts: function() {
    return this.where({ active: true });
  }
});"#,
                    "Backbone.js model and collection with validation and filtering",
                ),
                Card::new(
                    "Responsive HTML Template",
                    Language::Html,
                    r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Product Dashboard</title>
  <link href="bootstrap.min.css" rel="stylesheet">
</head>
<body>
  <nav class="navbar navbar-expand-lg navbar-dark bg-primary">
    <div class="container-fluid">
      <a class="navbar-brand" href="#">Dashboard</a>
    </div>
  </nav>

  <main class="container mt-4">
    <div id="productGrid" class="row g-4"></div>
  </main>
</body>
</html>"##,
                    "Responsive HTML template with Bootstrap 5",
                ),
                Card::new(
                    "Modern CSS Styling",
                    Language::Css,
                    r#".product-card {
  position: relative;
  border-radius: 0.5rem;
  background: var(--card-bg, #fff);
  box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.1);
  transition: transform 0.2s, box-shadow 0.2s;
}

.product-card:hover {
  transform: translateY(-2px);
}

@media (prefers-color-scheme: dark) {
  :root {
    --card-bg: #1f2937;
    --text-primary: #f3f4f6;
  }
}"#,
                    "Modern CSS with variables, dark mode, and responsive design",
                ),
            ],
        )
    }

    /// Database, cloud, and server snippets.
    pub fn infrastructure() -> Result<Deck, DomainError> {
        Deck::new(
            DeckId::new("infrastructure"),
            "Infrastructure & Operations",
            "Database tuning, cloud provisioning, and server configuration",
            vec![
                Card::new(
                    "PostgreSQL Database Optimization",
                    Language::Sql,
                    r#"-- Create optimized indexes
CREATE INDEX CONCURRENTLY idx_products_category
ON products USING BTREE (category_id)
WHERE active = true;

-- Optimize query with materialized view
CREATE MATERIALIZED VIEW monthly_sales AS
SELECT
    date_trunc('month', o.created_at) as month,
    p.category_id,
    SUM(oi.quantity * oi.unit_price) as total_revenue
FROM orders o
JOIN order_items oi ON o.id = oi.order_id
JOIN products p ON oi.product_id = p.id
GROUP BY 1, 2
WITH DATA;"#,
                    "PostgreSQL performance optimization with indexes, partitioning, and materialized views",
                )
                .with_category(Category::Database),
                Card::new(
                    "MongoDB Schema & Aggregation",
                    Language::JavaScript,
                    r#"db.orders.aggregate([
  { $match: {
    created_at: {
      $gte: new Date(Date.now() - 30*24*60*60*1000)
    }
  }},
  { $lookup: {
    from: "products",
    localField: "product_id",
    foreignField: "_id",
    as: "product"
  }},
  { $unwind: "$product" },
  { $group: {
    _id: "$product.category",
    total_sales: { $sum: "$quantity" }
  }}
]);"#,
                    "MongoDB schema validation and complex aggregation pipeline",
                )
                .with_category(Category::Database),
                Card::new(
                    "AWS Infrastructure as Code",
                    Language::Yaml,
                    r#"Resources:
  WebServerGroup:
    Type: AWS::AutoScaling::AutoScalingGroup
    Properties:
      MinSize: '2'
      MaxSize: '6'
      TargetGroupARNs:
        - !Ref ALBTargetGroup
  Database:
    Type: AWS::RDS::DBInstance
    Properties:
      Engine: postgres
      MultiAZ: true
      AllocatedStorage: '100'"#,
                    "AWS CloudFormation template for Rails application infrastructure",
                )
                .with_category(Category::Cloud),
                Card::new(
                    "Docker Compose Configuration",
                    Language::Yaml,
                    r#"services:
  web:
    build: .
    ports:
      - "3000:3000"
    depends_on:
      - db
      - redis
  db:
    image: postgres:16
    volumes:
      - pgdata:/var/lib/postgresql/data
  redis:
    image: redis:7

volumes:
  pgdata:"#,
                    "Docker Compose setup for Rails application with PostgreSQL and Redis",
                )
                .with_category(Category::Server),
                Card::new(
                    "Nginx Server Configuration",
                    Language::Bash,
                    r#"upstream app {
  server unix:///var/run/app.sock;
}

server {
  listen 443 ssl http2;
  server_name example.com;

  ssl_certificate /etc/ssl/certs/example.crt;
  ssl_certificate_key /etc/ssl/private/example.key;

  location / {
    proxy_pass http://app;
    proxy_set_header X-Forwarded-Proto https;
  }
}"#,
                    "Nginx configuration with SSL, HTTP/2, and load balancing",
                )
                .with_category(Category::Server),
            ],
        )
    }

    /// Third-party service integration snippets.
    pub fn integration() -> Result<Deck, DomainError> {
        Deck::new(
            DeckId::new("integration"),
            "Service Integrations",
            "Payments, messaging, cloud APIs, and AI provider plumbing",
            vec![
                Card::new(
                    "Advanced Payment Gateway Integration",
                    Language::Ruby,
                    r#"class PaymentProcessor
  def charge(order)
    intent = Stripe::PaymentIntent.create(
      amount: order.total_cents,
      currency: 'usd',
      metadata: { order_id: order.id }
    )
    order.update!(payment_intent_id: intent.id)
    intent
  rescue Stripe::CardError => e
    order.mark_failed!(reason: e.code)
    raise PaymentDeclined, e.message
  end
end"#,
                    "Advanced payment gateway implementation with validation, error handling, retries, and caching",
                )
                .with_category(Category::Payment),
                Card::new(
                    "Event-Driven Communication Service",
                    Language::Ruby,
                    r#"class NotificationService
  PROVIDERS = [TwilioProvider, SendgridProvider].freeze

  def deliver(event)
    PROVIDERS.each do |provider|
      return provider.send_message(event) if provider.healthy?
    end
    DeadLetterQueue.push(event)
  end
end"#,
                    "Sophisticated event-driven notification system with multiple providers and fallbacks",
                )
                .with_category(Category::Communication),
                Card::new(
                    "Advanced Cloud Infrastructure",
                    Language::JavaScript,
                    r#"class StackManager {
  async provision(stackName, template) {
    await this.cloudformation.createStack({
      StackName: stackName,
      TemplateBody: JSON.stringify(template),
      Capabilities: ['CAPABILITY_IAM']
    });

    const interval = setInterval(checkStackEvents, 10000);
    return this.waitForCompletion(stackName, interval);
  }
}"#,
                    "Enterprise-grade cloud infrastructure management with observability and error handling",
                )
                .with_category(Category::Cloud),
                Card::new(
                    "AI Service Integration Hub",
                    Language::Ruby,
                    r#"class AiHub
  def complete(prompt, providers: [:primary, :fallback])
    providers.each do |name|
      client = @clients.fetch(name)
      response = client.complete(prompt)
      return response if response.ok?
      instrument_failure(name, response)
    end
    raise AllProvidersFailed
  end
end"#,
                    "Enterprise AI service hub with multiple providers, fallbacks, and monitoring",
                )
                .with_category(Category::Ai),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hardcoded_decks_have_expected_shape() {
        let decks = hardcoded::all().unwrap();
        assert_eq!(decks.len(), 3);

        let fullstack = &decks[0];
        assert_eq!(fullstack.id, DeckId::new("fullstack"));
        assert_eq!(fullstack.len(), 8);
        // The full-stack deck carries no category badges.
        assert!(fullstack.cards().iter().all(|c| c.category.is_none()));

        let infra = &decks[1];
        assert_eq!(infra.len(), 5);
        assert!(infra.cards().iter().all(|c| c.category.is_some()));

        let integration = &decks[2];
        assert_eq!(integration.len(), 4);
        assert_eq!(integration.cards()[0].category, Some(Category::Payment));
    }

    #[test]
    fn hardcoded_decks_pass_domain_validation() {
        use showreel_core::domain::DomainValidator;
        for deck in hardcoded::all().unwrap() {
            DomainValidator::validate_deck(&deck).unwrap();
        }
    }
}
