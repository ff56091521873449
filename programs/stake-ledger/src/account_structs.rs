use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
#[instruction(uid: u64)]
pub struct Initialize<'info> {
    // an existing account is rejected by `StakeAccount::open`
    #[account(
        init_if_needed,
        payer = owner,
        space = StakeAccount::LEN,
        seeds = [STAKE_SEED, owner.key().as_ref(), mint.key().as_ref(), uid.to_le_bytes().as_ref()],
        bump
    )]
    pub stake_account: Account<'info, StakeAccount>,

    /// The vault token account holding the staked tokens. Its authority is the stake
    /// account PDA, so only this program can move tokens out of it.
    #[account(
        init_if_needed,
        payer = owner,
        seeds = [VAULT_SEED, stake_account.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = stake_account,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(uid: u64)]
pub struct DepositFunds<'info> {
    #[account(
        mut,
        seeds = [STAKE_SEED, stake_account.owner.as_ref(), mint.key().as_ref(), uid.to_le_bytes().as_ref()],
        bump,
        constraint = stake_account.owner == owner.key() @ StakeErrorCode::Unauthorized,
        constraint = stake_account.mint == mint.key() @ StakeErrorCode::InvalidMint
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, stake_account.key().as_ref()],
        bump,
        constraint = vault.key() == stake_account.vault @ StakeErrorCode::InvalidVault,
        constraint = vault.mint == mint.key() @ StakeErrorCode::InvalidMint
    )]
    pub vault: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = owner_token_account.mint == mint.key() @ StakeErrorCode::InvalidMint,
        constraint = owner_token_account.owner == owner.key() @ StakeErrorCode::InvalidTokenAccountOwner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
#[instruction(uid: u64)]
pub struct WithdrawalRequest<'info> {
    #[account(
        mut,
        seeds = [STAKE_SEED, stake_account.owner.as_ref(), mint.key().as_ref(), uid.to_le_bytes().as_ref()],
        bump,
        constraint = stake_account.owner == owner.key() @ StakeErrorCode::Unauthorized,
        constraint = stake_account.mint == mint.key() @ StakeErrorCode::InvalidMint
    )]
    pub stake_account: Account<'info, StakeAccount>,

    pub owner: Signer<'info>,

    pub mint: Account<'info, Mint>,
}

#[derive(Accounts)]
#[instruction(uid: u64)]
pub struct WithdrawFunds<'info> {
    #[account(
        mut,
        seeds = [STAKE_SEED, stake_account.owner.as_ref(), mint.key().as_ref(), uid.to_le_bytes().as_ref()],
        bump,
        constraint = stake_account.owner == owner.key() @ StakeErrorCode::Unauthorized,
        constraint = stake_account.mint == mint.key() @ StakeErrorCode::InvalidMint
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, stake_account.key().as_ref()],
        bump,
        constraint = vault.key() == stake_account.vault @ StakeErrorCode::InvalidVault,
        constraint = vault.owner == stake_account.key() @ StakeErrorCode::InvalidVault
    )]
    pub vault: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = owner_token_account.mint == mint.key() @ StakeErrorCode::InvalidMint,
        constraint = owner_token_account.owner == owner.key() @ StakeErrorCode::InvalidTokenAccountOwner
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

// read-only, anyone may query
#[derive(Accounts)]
#[instruction(uid: u64)]
pub struct StakeStatusQuery<'info> {
    #[account(
        seeds = [STAKE_SEED, stake_account.owner.as_ref(), mint.key().as_ref(), uid.to_le_bytes().as_ref()],
        bump,
        constraint = stake_account.mint == mint.key() @ StakeErrorCode::InvalidMint
    )]
    pub stake_account: Account<'info, StakeAccount>,

    pub mint: Account<'info, Mint>,
}
