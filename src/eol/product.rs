//! Curated package/SDK name → endoflife.date product key mapping
//!
//! Exact-match lookup only. Related package names collapse many-to-one onto
//! a single product key by explicit curation (e.g. `pg` and `postgres` both
//! map to `postgresql`); there is no fuzzy or partial matching here.

use std::collections::HashMap;
use std::sync::LazyLock;

static PRODUCT_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // npm / JavaScript
        ("react", "react"),
        ("vue", "vue"),
        ("@angular/core", "angular"),
        ("@nestjs/core", "nestjs"),
        ("next", "nextjs"),
        ("nuxt", "nuxt"),
        ("ember-source", "ember"),
        ("svelte", "svelte"),
        ("jquery", "jquery"),
        ("bootstrap", "bootstrap"),
        ("tailwindcss", "tailwindcss"),
        ("electron", "electron"),
        ("native-base", "native-base"),
        ("react-native", "react-native"),
        ("expo", "expo"),
        ("expo-cli", "expo"),
        ("node", "node"),
        ("npm", "npm"),
        ("yarn", "yarn"),
        ("pnpm", "pnpm"),
        ("express", "express"),
        ("bun", "bun"),
        // Composer / PHP
        ("laravel/framework", "laravel"),
        ("symfony/symfony", "symfony"),
        ("drupal/core", "drupal"),
        ("magento/product-community-edition", "magento"),
        ("typo3/cms-core", "typo3"),
        ("php", "php"),
        ("composer", "composer"),
        // Python
        ("django", "django"),
        ("python", "python"),
        ("ansible", "ansible"),
        ("kubernetes", "kubernetes"),
        // Go
        ("go", "go"),
        ("github.com/gofiber/fiber", "fiber"),
        // Ruby
        ("ruby", "ruby"),
        ("rails", "rails"),
        ("jekyll", "jekyll"),
        ("bundler", "bundler"),
        ("gem", "gem"),
        // Databases and drivers
        ("postgresql", "postgresql"),
        ("postgres", "postgresql"),
        ("pg", "postgresql"),
        ("mysql", "mysql"),
        ("mysql2", "mysql"),
        ("mongodb", "mongodb"),
        ("mongoose", "mongodb"),
        ("redis", "redis"),
        ("ioredis", "redis"),
        ("mariadb", "mariadb"),
        ("elasticsearch", "elasticsearch"),
        ("@elastic/elasticsearch", "elasticsearch"),
        ("memcached", "memcached"),
        ("cassandra-driver", "cassandra"),
        ("neo4j-driver", "neo4j"),
        ("sqlite3", "sqlite"),
        ("better-sqlite3", "sqlite"),
        // Test frameworks
        ("jest", "jest"),
        ("mocha", "mocha"),
        ("cypress", "cypress"),
        ("playwright", "playwright"),
        ("@playwright/test", "playwright"),
        ("jasmine", "jasmine"),
    ])
});

/// Maps a detected package/SDK/binary name to its canonical product key.
/// Returns `None` for unknown identifiers; an unknown name is an absent
/// result, not an error.
pub fn map_to_product(raw_identifier: &str) -> Option<&'static str> {
    PRODUCT_MAP.get(raw_identifier).copied()
}
