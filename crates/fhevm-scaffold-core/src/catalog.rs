//! Static catalog of FHEVM examples and the categories that group them.
//!
//! The tables are compiled into the binary and never change at run time.
//! Paths are relative to the hub root configured in
//! [`ScaffoldConfig::root`](crate::config::ScaffoldConfig::root).

use std::fmt::Write as _;

use crate::error::{Result, ScaffoldError};

/// One example: a contract, its test and the category it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleDescriptor {
    /// Symbolic name used on the command line (e.g. `fhe-counter`).
    pub name: &'static str,
    /// Contract source, relative to the hub root.
    pub contract: &'static str,
    /// Test source, relative to the hub root.
    pub test: &'static str,
    pub description: &'static str,
    /// Name of the [`CategoryDescriptor`] this example is filed under.
    pub category: &'static str,
}

impl ExampleDescriptor {
    /// `package.json` name of a project generated from this example.
    pub fn project_name(&self) -> String {
        format!("fhevm-example-{}", slugify(self.name))
    }
}

/// A named, ordered group of examples generated together into one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub name: &'static str,
    /// Heading used for this category in the documentation index.
    pub title: &'static str,
    pub description: &'static str,
    /// Example names, in deployment order.
    pub examples: &'static [&'static str],
}

impl CategoryDescriptor {
    /// `package.json` name of a project generated from this category.
    pub fn project_name(&self) -> String {
        format!("fhevm-examples-{}", slugify(self.name))
    }
}

/// Read-only lookup over the example and category tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    examples: &'static [ExampleDescriptor],
    categories: &'static [CategoryDescriptor],
}

impl Catalog {
    pub const fn new(
        examples: &'static [ExampleDescriptor],
        categories: &'static [CategoryDescriptor],
    ) -> Self {
        Self {
            examples,
            categories,
        }
    }

    /// The catalog shipped with the tool.
    pub fn builtin() -> Self {
        Self::new(EXAMPLES, CATEGORIES)
    }

    pub fn examples(&self) -> &'static [ExampleDescriptor] {
        self.examples
    }

    pub fn categories(&self) -> &'static [CategoryDescriptor] {
        self.categories
    }

    /// Look up an example by its symbolic name.
    pub fn example(&self, name: &str) -> Result<&'static ExampleDescriptor> {
        self.examples
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ScaffoldError::UnknownExample(name.to_string()))
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Result<&'static CategoryDescriptor> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ScaffoldError::UnknownCategory(name.to_string()))
    }

    /// Resolve a category's member names, keeping the declared order.
    pub fn members(&self, category: &CategoryDescriptor) -> Result<Vec<&'static ExampleDescriptor>> {
        category.examples.iter().map(|name| self.example(name)).collect()
    }

    /// Index heading for a category name, falling back to the raw name.
    pub fn category_title<'a>(&self, name: &'a str) -> &'a str {
        self.category(name).map(|c| c.title).unwrap_or(name)
    }

    /// Human-readable table of every category and example, used by `list`
    /// and appended to `--help`.
    pub fn listing(&self) -> String {
        let width = self
            .examples
            .iter()
            .map(|e| e.name.len())
            .chain(self.categories.iter().map(|c| c.name.len()))
            .max()
            .unwrap_or(0);

        let mut out = String::from("Categories:\n");
        for c in self.categories {
            let _ = writeln!(out, "  {:width$}  {}", c.name, c.description);
        }
        out.push_str("\nExamples:\n");
        for e in self.examples {
            let _ = writeln!(out, "  {:width$}  {}", e.name, e.description);
        }
        out
    }
}

/// Reduce a name to lowercase ASCII alphanumerics separated by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

// -------------------------------------------------------
// Built-in tables
// -------------------------------------------------------

const EXAMPLES: &[ExampleDescriptor] = &[
    ExampleDescriptor {
        name: "fhe-counter",
        contract: "contracts/basic/FHECounter.sol",
        test: "test/basic/FHECounter.test.ts",
        description: "Encrypted counter with increment and decrement on euint32",
        category: "basic",
    },
    ExampleDescriptor {
        name: "encrypt-single-value",
        contract: "contracts/basic/encrypt/EncryptSingleValue.sol",
        test: "test/basic/encrypt/EncryptSingleValue.test.ts",
        description: "Accept one encrypted input with its input proof and store it",
        category: "basic",
    },
    ExampleDescriptor {
        name: "encrypt-multiple-values",
        contract: "contracts/basic/encrypt/EncryptMultipleValues.sol",
        test: "test/basic/encrypt/EncryptMultipleValues.test.ts",
        description: "Accept several encrypted inputs of different types under a single proof",
        category: "basic",
    },
    ExampleDescriptor {
        name: "user-decrypt-single-value",
        contract: "contracts/basic/decrypt/UserDecryptSingleValue.sol",
        test: "test/basic/decrypt/UserDecryptSingleValue.test.ts",
        description: "Grant a user access to one handle and decrypt it client-side",
        category: "basic",
    },
    ExampleDescriptor {
        name: "user-decrypt-multiple-values",
        contract: "contracts/basic/decrypt/UserDecryptMultipleValues.sol",
        test: "test/basic/decrypt/UserDecryptMultipleValues.test.ts",
        description: "Grant a user access to several handles and decrypt them in one request",
        category: "basic",
    },
    ExampleDescriptor {
        name: "public-decrypt-single-value",
        contract: "contracts/basic/decrypt/PublicDecryptSingleValue.sol",
        test: "test/basic/decrypt/PublicDecryptSingleValue.test.ts",
        description: "Mark one handle publicly decryptable and verify the clear value on-chain",
        category: "basic",
    },
    ExampleDescriptor {
        name: "public-decrypt-multiple-values",
        contract: "contracts/basic/decrypt/PublicDecryptMultipleValues.sol",
        test: "test/basic/decrypt/PublicDecryptMultipleValues.test.ts",
        description: "Publicly decrypt several handles and check the decryption proof",
        category: "basic",
    },
    ExampleDescriptor {
        name: "fhe-add",
        contract: "contracts/operations/FHEAdd.sol",
        test: "test/operations/FHEAdd.test.ts",
        description: "Add two encrypted integers and share the result with the caller",
        category: "operations",
    },
    ExampleDescriptor {
        name: "fhe-comparison",
        contract: "contracts/operations/FHEComparison.sol",
        test: "test/operations/FHEComparison.test.ts",
        description: "Compare encrypted integers with eq, lt and gt into an encrypted boolean",
        category: "operations",
    },
    ExampleDescriptor {
        name: "fhe-if-then-else",
        contract: "contracts/operations/FHEIfThenElse.sol",
        test: "test/operations/FHEIfThenElse.test.ts",
        description: "Branch-free selection between two encrypted values with FHE.select",
        category: "operations",
    },
    ExampleDescriptor {
        name: "access-control",
        contract: "contracts/access-control/FHEAccessControl.sol",
        test: "test/access-control/FHEAccessControl.test.ts",
        description: "Manage handle permissions with allow, allowThis and allowTransient",
        category: "access-control",
    },
    ExampleDescriptor {
        name: "blind-auction",
        contract: "contracts/auctions/BlindAuction.sol",
        test: "test/auctions/BlindAuction.test.ts",
        description: "Sealed-bid auction that matches the highest encrypted bid",
        category: "auctions",
    },
];

const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor {
        name: "basic",
        title: "Basic",
        description: "Counter, encryption and decryption fundamentals",
        examples: &[
            "fhe-counter",
            "encrypt-single-value",
            "encrypt-multiple-values",
            "user-decrypt-single-value",
            "user-decrypt-multiple-values",
            "public-decrypt-single-value",
            "public-decrypt-multiple-values",
        ],
    },
    CategoryDescriptor {
        name: "operations",
        title: "FHE Operations",
        description: "Arithmetic, comparison and selection on encrypted values",
        examples: &["fhe-add", "fhe-comparison", "fhe-if-then-else"],
    },
    CategoryDescriptor {
        name: "access-control",
        title: "Access Control",
        description: "Permission management for encrypted handles",
        examples: &["access-control"],
    },
    CategoryDescriptor {
        name: "auctions",
        title: "Auctions",
        description: "Auction contracts built on encrypted bids",
        examples: &["blind-auction"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_unique() {
        let catalog = Catalog::builtin();
        let mut names: Vec<_> = catalog.examples().iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.examples().len());
    }

    #[test]
    fn test_builtin_categories_resolve() {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            let members = catalog.members(category).unwrap();
            assert!(!members.is_empty());
            assert!(members.iter().all(|e| e.category == category.name));
        }
        for example in catalog.examples() {
            assert!(catalog.category(example.category).is_ok(), "{}", example.name);
        }
    }

    #[test]
    fn test_lookup_unknown() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.example("nope"),
            Err(ScaffoldError::UnknownExample(n)) if n == "nope"
        ));
        assert!(matches!(
            catalog.category("nope"),
            Err(ScaffoldError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_project_names() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.example("fhe-counter").unwrap().project_name(),
            "fhevm-example-fhe-counter"
        );
        assert_eq!(
            catalog.category("basic").unwrap().project_name(),
            "fhevm-examples-basic"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("fhe-counter"), "fhe-counter");
        assert_eq!(slugify("FHE Counter"), "fhe-counter");
        assert_eq!(slugify("  --Blind__Auction!! "), "blind-auction");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_listing_mentions_everything() {
        let catalog = Catalog::builtin();
        let listing = catalog.listing();
        for e in catalog.examples() {
            assert!(listing.contains(e.name));
        }
        for c in catalog.categories() {
            assert!(listing.contains(c.description));
        }
    }

    #[test]
    fn test_category_title_fallback() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_title("operations"), "FHE Operations");
        assert_eq!(catalog.category_title("misc"), "misc");
    }
}
