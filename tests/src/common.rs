use anchor_lang::error::ERROR_CODE_OFFSET;
use anchor_lang::{AccountDeserialize, InstructionData, Space, ToAccountMetas};
use hibernating_vault::error::VaultError;
use hibernating_vault::state::{GlobalConfig, VaultAccount};
use hibernating_vault::{accounts, instruction};
use litesvm::types::{FailedTransactionMetadata, TransactionResult};
use litesvm::LiteSVM;
use solana_clock::Clock;
use solana_instruction::error::InstructionError;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_native_token::LAMPORTS_PER_SOL;
use solana_pubkey::Pubkey;
use solana_sdk_ids::system_program;
use solana_signer::Signer;
use solana_transaction::Transaction;
use solana_transaction_error::TransactionError;
use std::path::PathBuf;

pub const PROGRAM_ID: Pubkey = hibernating_vault::ID;

/// Anchor raises this when a required account has never been created.
pub const ACCOUNT_NOT_INITIALIZED: u32 = 3012;

/// Arbitrary but realistic starting ledger time.
pub const GENESIS_TIMESTAMP: i64 = 1_700_000_000;

pub fn read_program() -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../target/deploy/hibernating_vault.so");
    std::fs::read(&path).unwrap_or_else(|_| panic!("Failed to read program from {:?}", path))
}

/// Fresh SVM with the program loaded, the clock pinned, and a funded admin.
pub fn setup() -> (LiteSVM, Keypair) {
    let mut svm = LiteSVM::new();
    let _ = svm.add_program(PROGRAM_ID, &read_program());

    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp = GENESIS_TIMESTAMP;
    svm.set_sysvar::<Clock>(&clock);

    let admin = funded_wallet(&mut svm);
    (svm, admin)
}

pub fn funded_wallet(svm: &mut LiteSVM) -> Keypair {
    let wallet = Keypair::new();
    svm.airdrop(&wallet.pubkey(), 10 * LAMPORTS_PER_SOL).unwrap();
    wallet
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

pub fn now(svm: &LiteSVM) -> i64 {
    svm.get_sysvar::<Clock>().unix_timestamp
}

pub fn warp_seconds(svm: &mut LiteSVM, seconds: i64) {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp += seconds;
    svm.set_sysvar::<Clock>(&clock);
}

// ---------------------------------------------------------------------------
// Addresses and account reads
// ---------------------------------------------------------------------------

pub fn config_pda() -> Pubkey {
    GlobalConfig::address().0
}

pub fn vault_pda(owner: &Pubkey) -> Pubkey {
    VaultAccount::address(owner).0
}

pub fn fetch_config(svm: &LiteSVM) -> Option<GlobalConfig> {
    let account = svm.get_account(&config_pda())?;
    GlobalConfig::try_deserialize(&mut account.data.as_slice()).ok()
}

pub fn fetch_vault(svm: &LiteSVM, owner: &Pubkey) -> Option<VaultAccount> {
    let account = svm.get_account(&vault_pda(owner))?;
    if account.lamports == 0 {
        return None;
    }
    VaultAccount::try_deserialize(&mut account.data.as_slice()).ok()
}

pub fn lamports(svm: &LiteSVM, key: &Pubkey) -> u64 {
    svm.get_account(key).map(|a| a.lamports).unwrap_or(0)
}

/// Rent reserve a vault PDA carries on top of its balance.
pub fn vault_rent(svm: &LiteSVM) -> u64 {
    svm.minimum_balance_for_rent_exemption(8 + VaultAccount::INIT_SPACE)
}

// ---------------------------------------------------------------------------
// Instruction builders
// ---------------------------------------------------------------------------

pub fn initialize_config_ix(admin: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts::InitializeConfig {
            admin: *admin,
            global_config: config_pda(),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::InitializeConfig {}.data(),
    }
}

pub fn update_root_ix(admin: &Pubkey, new_root: [u8; 32]) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts::UpdateRoot {
            admin: *admin,
            global_config: config_pda(),
        }
        .to_account_metas(None),
        data: instruction::UpdateRoot { new_root }.data(),
    }
}

pub fn initialize_ix(owner: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts::Initialize {
            owner: *owner,
            vault_account: vault_pda(owner),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::Initialize {}.data(),
    }
}

/// `signer` and `vault` are separate so tests can aim at someone else's vault.
pub fn deposit_ix(signer: &Pubkey, vault: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts::Deposit {
            owner: *signer,
            vault_account: *vault,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::Deposit { amount }.data(),
    }
}

pub fn withdraw_ix(signer: &Pubkey, vault: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts::Withdraw {
            owner: *signer,
            vault_account: *vault,
        }
        .to_account_metas(None),
        data: instruction::Withdraw { amount }.data(),
    }
}

pub fn hibernate_ix(signer: &Pubkey, vault: &Pubkey, destination: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts::HibernateAccount {
            owner: *signer,
            vault_account: *vault,
            destination: *destination,
        }
        .to_account_metas(None),
        data: instruction::HibernateAccount {}.data(),
    }
}

pub fn wake_up_ix(owner: &Pubkey, proof: [u8; 32], balance: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts::WakeUpAccount {
            owner: *owner,
            global_config: config_pda(),
            vault_account: vault_pda(owner),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: instruction::WakeUpAccount { proof, balance }.data(),
    }
}

// ---------------------------------------------------------------------------
// Sending
// ---------------------------------------------------------------------------

/// Signs with every keypair in `signers`; the first one pays. The blockhash
/// is expired afterwards so an identical transaction can be replayed.
pub fn send(svm: &mut LiteSVM, ix: Instruction, signers: &[&Keypair]) -> TransactionResult {
    let payer = signers[0].pubkey();
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer), signers, svm.latest_blockhash());
    let result = svm.send_transaction(tx);
    svm.expire_blockhash();
    result
}

pub fn send_ok(svm: &mut LiteSVM, ix: Instruction, signers: &[&Keypair]) -> Vec<String> {
    match send(svm, ix, signers) {
        Ok(meta) => meta.logs,
        Err(failed) => panic!("transaction failed: {:?}\n{:#?}", failed.err, failed.meta.logs),
    }
}

/// Admin creates the config; a wallet opens a vault and deposits `amount`.
pub fn active_vault(svm: &mut LiteSVM, admin: &Keypair, amount: u64) -> Keypair {
    send_ok(svm, initialize_config_ix(&admin.pubkey()), &[admin]);
    let owner = funded_wallet(svm);
    send_ok(svm, initialize_ix(&owner.pubkey()), &[&owner]);
    if amount > 0 {
        let vault = vault_pda(&owner.pubkey());
        send_ok(svm, deposit_ix(&owner.pubkey(), &vault, amount), &[&owner]);
    }
    owner
}

// ---------------------------------------------------------------------------
// Error assertions
// ---------------------------------------------------------------------------

pub fn custom_code(failed: &FailedTransactionMetadata) -> Option<u32> {
    match &failed.err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
        _ => None,
    }
}

pub fn vault_code(err: VaultError) -> u32 {
    ERROR_CODE_OFFSET + err as u32
}

pub fn assert_custom_error(result: TransactionResult, expected: u32) {
    match result {
        Ok(_) => panic!("expected custom error {}, transaction succeeded", expected),
        Err(failed) => assert_eq!(
            custom_code(&failed),
            Some(expected),
            "unexpected failure {:?}\n{:#?}",
            failed.err,
            failed.meta.logs
        ),
    }
}

pub fn assert_vault_error(result: TransactionResult, expected: VaultError) {
    assert_custom_error(result, vault_code(expected));
}
