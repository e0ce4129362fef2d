//! Fixture hub shared by the filesystem tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::catalog::{Catalog, CategoryDescriptor, ExampleDescriptor};
use crate::config::ScaffoldConfig;

const EXAMPLES: &[ExampleDescriptor] = &[
    ExampleDescriptor {
        name: "fhe-counter",
        contract: "contracts/basic/FHECounter.sol",
        test: "test/basic/FHECounter.test.ts",
        description: "Encrypted counter",
        category: "basic",
    },
    ExampleDescriptor {
        name: "fhe-add",
        contract: "contracts/operations/FHEAdd.sol",
        test: "test/operations/FHEAdd.test.ts",
        description: "Encrypted addition",
        category: "basic",
    },
    ExampleDescriptor {
        name: "encrypt-single-value",
        contract: "contracts/basic/encrypt/EncryptSingleValue.sol",
        test: "test/basic/encrypt/EncryptSingleValue.test.ts",
        description: "Single encrypted input",
        category: "basic",
    },
    ExampleDescriptor {
        name: "blind-auction",
        contract: "contracts/auctions/BlindAuction.sol",
        test: "test/auctions/BlindAuction.test.ts",
        description: "Sealed-bid auction",
        category: "auctions",
    },
];

const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor {
        name: "basic",
        title: "Basic",
        description: "Fundamentals",
        examples: &["fhe-counter", "fhe-add", "encrypt-single-value"],
    },
    CategoryDescriptor {
        name: "auctions",
        title: "Auctions",
        description: "Auctions",
        examples: &["blind-auction"],
    },
];

pub const COUNTER_SOL: &str = r#"// SPDX-License-Identifier: BSD-3-Clause-Clear
pragma solidity ^0.8.24;

import {FHE, euint32, externalEuint32} from "@fhevm/solidity/lib/FHE.sol";
import {ZamaEthereumConfig} from "@fhevm/solidity/config/ZamaConfig.sol";

/**
 * @title FHE Counter
 * @notice A counter whose value stays encrypted.
 * Increments and decrements use FHE.add and FHE.sub.
 * category: basic
 * chapter: counter
 */
contract FHECounter is ZamaEthereumConfig {
    euint32 private _count;

    function increment(externalEuint32 inputEuint32, bytes calldata inputProof) external {
        euint32 value = FHE.fromExternal(inputEuint32, inputProof);
        _count = FHE.add(_count, value);
        FHE.allowThis(_count);
        FHE.allow(_count, msg.sender);
    }
}
"#;

pub const COUNTER_TEST: &str = r#"/**
 * level: beginner
 */
import { expect } from "chai";

describe("FHECounter", function () {
  it("encrypted count should be uninitialized after deployment", async function () {
    expect(1).to.eq(1);
  });
});
"#;

fn simple_contract(name: &str, title: &str) -> String {
    format!(
        "// SPDX-License-Identifier: BSD-3-Clause-Clear\npragma solidity ^0.8.24;\n\n/// @title {title}\n/// @notice Demonstrates {name}.\ncontract {name} is ZamaEthereumConfig {{\n}}\n"
    )
}

fn simple_test(name: &str) -> String {
    format!("import {{ expect }} from \"chai\";\n\ndescribe(\"{name}\", function () {{}});\n")
}

/// A temporary hub: template project, example sources and a matching catalog.
pub struct Hub {
    pub dir: TempDir,
    pub config: ScaffoldConfig,
    pub catalog: Catalog,
}

impl Hub {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig::rooted_at(dir.path());
        let hub = Self {
            dir,
            config,
            catalog: Catalog::new(EXAMPLES, CATEGORIES),
        };

        let template = [
            (
                "package.json",
                "{\n  \"name\": \"fhevm-hardhat-template\",\n  \"description\": \"Template\",\n  \"version\": \"0.1.0\",\n  \"scripts\": {\n    \"compile\": \"hardhat compile\",\n    \"test\": \"hardhat test\"\n  }\n}\n",
            ),
            ("hardhat.config.ts", "export default {};\n"),
            ("tsconfig.json", "{}\n"),
            ("README.md", "# Template\n"),
            ("contracts/FHECounter.sol", "contract FHECounter {}\n"),
            ("test/FHECounter.ts", "describe(\"FHECounter\");\n"),
            ("deploy/deploy.ts", "// template deploy\n"),
            ("tasks/accounts.ts", "// accounts task\n"),
            ("node_modules/hardhat/index.js", "module.exports = {};\n"),
            ("artifacts/contracts/FHECounter.json", "{}\n"),
            ("contracts/nested/cache/keep.sol", "// nested cache dir\n"),
        ];
        for (rel, contents) in template {
            hub.write(&Path::new("fhevm-hardhat-template").join(rel), contents);
        }

        hub.write_source("contracts/basic/FHECounter.sol", COUNTER_SOL);
        hub.write_source("test/basic/FHECounter.test.ts", COUNTER_TEST);
        hub.write_source("contracts/operations/FHEAdd.sol", &simple_contract("FHEAdd", "FHE Add"));
        hub.write_source("test/operations/FHEAdd.test.ts", &simple_test("FHEAdd"));
        hub.write_source(
            "contracts/basic/encrypt/EncryptSingleValue.sol",
            &simple_contract("EncryptSingleValue", "Encrypt Single Value"),
        );
        hub.write_source(
            "test/basic/encrypt/EncryptSingleValue.test.ts",
            &simple_test("EncryptSingleValue"),
        );
        hub.write_source(
            "contracts/auctions/BlindAuction.sol",
            &simple_contract("BlindAuction", "Blind Auction"),
        );
        hub.write_source("test/auctions/BlindAuction.test.ts", &simple_test("BlindAuction"));
        hub
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn out(&self, name: &str) -> PathBuf {
        self.path().join("out").join(name)
    }

    pub fn example(&self, name: &str) -> &'static ExampleDescriptor {
        self.catalog.example(name).unwrap()
    }

    pub fn write_source(&self, rel: &str, contents: &str) {
        self.write(Path::new(rel), contents);
    }

    pub fn remove_source(&self, rel: &str) {
        std::fs::remove_file(self.path().join(rel)).unwrap();
    }

    fn write(&self, rel: &Path, contents: &str) {
        let path = self.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }
}

/// Every file under `dir`, relative and sorted.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}
