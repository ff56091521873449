use crate::account_structs::*;
use crate::events::*;
use crate::state::{StakeAccount, StakeStatus, WithdrawReceipt, STAKE_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

pub fn initialize(ctx: Context<Initialize>, uid: u64) -> Result<StakeAccount> {
    let owner = ctx.accounts.owner.key();
    let mint = ctx.accounts.mint.key();
    let vault = ctx.accounts.vault.key();

    let stake_account = &mut ctx.accounts.stake_account;
    stake_account.open(owner, mint, uid, vault)?;

    msg!("Stake account {} opened for {} (uid {})", stake_account.key(), owner, uid);

    emit!(StakeInitialized {
        owner,
        mint,
        uid,
        stake_account: stake_account.key(),
        vault,
    });

    Ok(StakeAccount::clone(stake_account))
}

pub fn deposit_funds(
    ctx: Context<DepositFunds>,
    uid: u64,
    amount: u64,
    timestamp: u64,
    unbonding_period_days: u64,
) -> Result<StakeAccount> {
    let deposited = ctx
        .accounts
        .stake_account
        .deposit(amount, timestamp, unbonding_period_days)?;

    // only the new tokens move; accrued interest is already backed by reward funding in the vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.owner_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        deposited.transfer,
    )?;

    ctx.accounts.stake_account.set_inner(deposited.account.clone());

    msg!(
        "Deposited {} (+{} interest), principal now {}",
        amount,
        deposited.interest,
        deposited.account.principal
    );

    emit!(DepositEvent {
        owner: ctx.accounts.owner.key(),
        uid,
        amount,
        interest: deposited.interest,
        principal: deposited.account.principal,
        unbonding_period_days,
        timestamp,
        vault: ctx.accounts.vault.key(),
    });

    Ok(deposited.account)
}

pub fn withdrawal_request(
    ctx: Context<WithdrawalRequest>,
    uid: u64,
    timestamp: u64,
) -> Result<StakeAccount> {
    let requested = ctx.accounts.stake_account.request_withdrawal(timestamp)?;
    let unbonding_ends_at = requested.unbonding_deadline(timestamp);

    ctx.accounts.stake_account.set_inner(requested.clone());

    msg!("Withdrawal requested at {}, unbonding ends at {}", timestamp, unbonding_ends_at);

    emit!(WithdrawalRequestedEvent {
        owner: ctx.accounts.owner.key(),
        uid,
        timestamp,
        unbonding_ends_at,
    });

    Ok(requested)
}

pub fn withdraw_funds(ctx: Context<WithdrawFunds>, uid: u64, timestamp: u64) -> Result<WithdrawReceipt> {
    let withdrawn = ctx
        .accounts
        .stake_account
        .withdraw(timestamp, ctx.accounts.vault.amount)?;

    let owner_key = ctx.accounts.owner.key();
    let mint_key = ctx.accounts.mint.key();
    let uid_bytes = uid.to_le_bytes();
    let seeds: &[&[u8]] = &[
        STAKE_SEED,
        owner_key.as_ref(),
        mint_key.as_ref(),
        uid_bytes.as_ref(),
        &[ctx.bumps.stake_account],
    ];
    let signer = &[&seeds[..]];
    let transfer_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.owner_token_account.to_account_info(),
        authority: ctx.accounts.stake_account.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
            signer,
        ),
        withdrawn.payout,
    )?;

    ctx.accounts.stake_account.set_inner(withdrawn.account.clone());

    msg!("Withdrew {} ({} interest)", withdrawn.payout, withdrawn.interest);

    emit!(WithdrawEvent {
        owner: owner_key,
        uid,
        payout: withdrawn.payout,
        interest: withdrawn.interest,
        timestamp,
        vault: ctx.accounts.vault.key(),
    });

    Ok(WithdrawReceipt {
        payout: withdrawn.payout,
        interest: withdrawn.interest,
        account: withdrawn.account,
    })
}

pub fn stake_status(ctx: Context<StakeStatusQuery>, _uid: u64, timestamp: u64) -> Result<StakeStatus> {
    ctx.accounts.stake_account.status(timestamp)
}
